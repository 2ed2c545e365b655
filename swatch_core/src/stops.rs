/// Every stop a palette is built over, lightest first.
///
/// 0 and 1000 are sentinels: they anchor the distribution curve and are
/// dropped before output.
pub const STOPS: [u32; 12] = [0, 50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 1000];

/// The stop that always reproduces the seed color.
pub const BASE_STOP: u32 = 500;

pub const SENTINEL_STOPS: [u32; 2] = [0, 1000];

pub fn is_sentinel(stop: u32) -> bool {
    SENTINEL_STOPS.contains(&stop)
}

/// Position of [`BASE_STOP`] in [`STOPS`].
pub fn base_index() -> usize {
    STOPS.iter().position(|&s| s == BASE_STOP).unwrap_or(STOPS.len() / 2)
}

/// The ten stops that make it into shaped output.
pub fn output_stops() -> impl Iterator<Item = u32> {
    STOPS.into_iter().filter(|&s| !is_sentinel(s))
}

/// `50` -> `"c50"`.
pub fn stop_label(stop: u32) -> String {
    format!("c{stop}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_sits_in_the_middle() {
        assert_eq!(base_index(), 6);
        assert_eq!(STOPS[base_index()], BASE_STOP);
    }

    #[test]
    fn output_stops_skip_sentinels() {
        let stops: Vec<u32> = output_stops().collect();
        assert_eq!(stops, vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900]);
        assert!(STOPS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn labels() {
        assert_eq!(stop_label(50), "c50");
        assert_eq!(stop_label(900), "c900");
    }
}
