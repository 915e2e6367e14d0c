use tracing::warn;

/// Swap chain sample counts `-msaa` accepts. For `R8G8B8A8_UNORM`, 4x is
/// guaranteed from feature level 10_1 and 8x only from 11_0; 2x depends on the
/// hardware. An unsupported count makes swap chain creation fail.
pub const SUPPORTED_SAMPLE_COUNTS: [u32; 4] = [1, 2, 4, 8];

/// Multisample count used when `-msaa` is absent or invalid.
pub const DEFAULT_SAMPLE_COUNT: u32 = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleCommandLine {
    /// Render with WARP (Windows Advanced Rasterization Platform) instead of
    /// the hardware adapter.
    pub use_warp_device: bool,
    /// Samples per pixel of the swap chain's back buffer.
    pub sample_count: u32,
}

impl SampleCommandLine {
    /// Parses switches of the form `-name` or `/name`, case-insensitively.
    /// Unknown arguments are ignored.
    pub fn from_args<I, A>(args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        let mut command_line = SampleCommandLine {
            use_warp_device: false,
            sample_count: DEFAULT_SAMPLE_COUNT,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let Some(switch) = switch_name(arg.as_ref()) else {
                continue;
            };

            if switch.eq_ignore_ascii_case("warp") {
                command_line.use_warp_device = true;
            } else if switch.eq_ignore_ascii_case("msaa") {
                match args.next().map(|value| parse_sample_count(value.as_ref())) {
                    Some(Some(count)) => command_line.sample_count = count,
                    Some(None) | None => warn!(
                        "-msaa expects one of {:?}, keeping {}",
                        SUPPORTED_SAMPLE_COUNTS, DEFAULT_SAMPLE_COUNT
                    ),
                }
            }
        }

        command_line
    }
}

impl Default for SampleCommandLine {
    fn default() -> Self {
        Self::from_args(std::env::args().skip(1))
    }
}

fn switch_name(arg: &str) -> Option<&str> {
    arg.strip_prefix('-').or_else(|| arg.strip_prefix('/'))
}

fn parse_sample_count(value: &str) -> Option<u32> {
    value
        .parse::<u32>()
        .ok()
        .filter(|count| SUPPORTED_SAMPLE_COUNTS.contains(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_hardware_with_4x_msaa() {
        let command_line = SampleCommandLine::from_args(Vec::<String>::new());
        assert!(!command_line.use_warp_device);
        assert_eq!(command_line.sample_count, 4);
    }

    #[test]
    fn warp_switch_accepts_both_prefixes_and_any_case() {
        assert!(SampleCommandLine::from_args(["-warp"]).use_warp_device);
        assert!(SampleCommandLine::from_args(["/WARP"]).use_warp_device);
        assert!(SampleCommandLine::from_args(["--other", "-Warp"]).use_warp_device);
        assert!(!SampleCommandLine::from_args(["warp"]).use_warp_device);
    }

    #[test]
    fn msaa_takes_the_following_argument() {
        let command_line = SampleCommandLine::from_args(["-msaa", "8", "-warp"]);
        assert_eq!(command_line.sample_count, 8);
        assert!(command_line.use_warp_device);

        assert_eq!(SampleCommandLine::from_args(["/MSAA", "1"]).sample_count, 1);
    }

    #[test]
    fn invalid_msaa_keeps_the_default() {
        assert_eq!(SampleCommandLine::from_args(["-msaa", "3"]).sample_count, 4);
        assert_eq!(SampleCommandLine::from_args(["-msaa", "lots"]).sample_count, 4);
        assert_eq!(SampleCommandLine::from_args(["-msaa"]).sample_count, 4);
    }

    #[test]
    fn invalid_msaa_value_is_consumed() {
        // "-warp" here is the bogus sample count, not a switch.
        let command_line = SampleCommandLine::from_args(["-msaa", "-warp"]);
        assert!(!command_line.use_warp_device);
        assert_eq!(command_line.sample_count, 4);
    }
}
