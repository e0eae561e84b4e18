/// Group numeric digits to facilitate reading long numbers
pub fn group_digits<F: std::fmt::Display>(n: F) -> String {
    use numsep::{separate, Locale};
    separate(n, Locale::English)
}

pub fn parse_triplet<T: std::str::FromStr>(s: &str) -> Result<(T,T,T), String>
where
    <T as std::str::FromStr>::Err: std::fmt::Display,
{
    let v = s.split(',').map(str::trim).collect::<Vec<_>>();
    let [x, y, z] = v[..] else {
        return Err(format!("expected three comma-separated values, got `{s}`"))
    };
    let parse = |t: &str| t.parse::<T>().map_err(|e| format!("`{t}`: {e}"));
    Ok((parse(x)?, parse(y)?, parse(z)?))
}

pub mod timing {

    use super::group_digits;
    use std::time::Instant;

    pub struct Progress {
        previous: Instant,
    }

    impl Progress {

        #[allow(clippy::new_without_default)]
        pub fn new() -> Self { Self { previous: Instant::now() } }

        /// Log message followed by time elapsed since construction or the last
        /// call to `done_with_message`
        pub fn done_with_message(&mut self, message: &str) {
            log::info!("{message}: {} ms",
                       group_digits(self.previous.elapsed().as_millis()));
            self.previous = Instant::now();
        }
    }
}
