//! Demo configuration (from CLI or defaults).

use anyhow::Context;
use spatialmix_core::EulerOrder;

/// Simulated session parameters.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Number of update cycles to simulate.
    pub steps: u32,
    /// Orbit radius in meters.
    pub radius: f64,
    /// Listener height in meters.
    pub height: f64,
    /// Composition order for the Euler input.
    pub order: EulerOrder,
    /// Number of simulated peers reported by the server.
    pub peers: u32,
    /// Toggle gain every N steps (0 keeps it constant).
    pub gain_every: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            steps: 36,
            radius: 2.0,
            height: 1.7,
            order: EulerOrder::default(),
            peers: 3,
            gain_every: 8,
        }
    }
}

impl DemoConfig {
    /// Set the number of steps.
    #[must_use]
    pub const fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Set the orbit radius.
    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the Euler composition order.
    #[must_use]
    pub const fn with_order(mut self, order: EulerOrder) -> Self {
        self.order = order;
        self
    }

    /// Set the number of simulated peers.
    #[must_use]
    pub const fn with_peers(mut self, peers: u32) -> Self {
        self.peers = peers;
        self
    }

    /// Set how often the gain toggles.
    #[must_use]
    pub const fn with_gain_every(mut self, gain_every: u32) -> Self {
        self.gain_every = gain_every;
        self
    }

    /// Parse from command line arguments.
    pub fn from_args() -> anyhow::Result<Self> {
        let args: Vec<String> = std::env::args().collect();
        Self::parse_args(&args)
    }

    /// Parse from a slice of arguments (the first is the program name).
    pub fn parse_args(args: &[String]) -> anyhow::Result<Self> {
        let mut config = Self::default();

        let mut i = 1;
        while i < args.len() {
            let flag = args[i].as_str();
            let next = args.get(i + 1).map(String::as_str);
            let value = || next.with_context(|| format!("missing value for {flag}"));
            match flag {
                "--steps" => {
                    config.steps = value()?.parse().context("invalid --steps")?;
                    i += 1;
                }
                "--radius" => {
                    config.radius = value()?.parse().context("invalid --radius")?;
                    i += 1;
                }
                "--height" => {
                    config.height = value()?.parse().context("invalid --height")?;
                    i += 1;
                }
                "--order" => {
                    config.order = value()?.parse()?;
                    i += 1;
                }
                "--peers" => {
                    config.peers = value()?.parse().context("invalid --peers")?;
                    i += 1;
                }
                "--gain-every" => {
                    config.gain_every = value()?.parse().context("invalid --gain-every")?;
                    i += 1;
                }
                _ => {}
            }
            i += 1;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("spatialmix-demo")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_gives_defaults() {
        let config = DemoConfig::parse_args(&args(&[])).unwrap();
        assert_eq!(config.steps, 36);
        assert_eq!(config.order, EulerOrder::YawPitchRoll);
    }

    #[test]
    fn parses_every_flag() {
        let config = DemoConfig::parse_args(&args(&[
            "--steps",
            "10",
            "--radius",
            "4.5",
            "--height",
            "1.2",
            "--order",
            "roll-yaw-pitch",
            "--peers",
            "0",
            "--gain-every",
            "2",
        ]))
        .unwrap();
        assert_eq!(config.steps, 10);
        assert_eq!(config.radius, 4.5);
        assert_eq!(config.height, 1.2);
        assert_eq!(config.order, EulerOrder::RollYawPitch);
        assert_eq!(config.peers, 0);
        assert_eq!(config.gain_every, 2);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(DemoConfig::parse_args(&args(&["--order", "sideways"])).is_err());
        assert!(DemoConfig::parse_args(&args(&["--steps", "many"])).is_err());
        assert!(DemoConfig::parse_args(&args(&["--radius"])).is_err());
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = DemoConfig::default()
            .with_steps(4)
            .with_radius(1.0)
            .with_order(EulerOrder::RollYawPitch)
            .with_peers(1)
            .with_gain_every(0);
        assert_eq!(config.steps, 4);
        assert_eq!(config.radius, 1.0);
        assert_eq!(config.order, EulerOrder::RollYawPitch);
        assert_eq!(config.peers, 1);
        assert_eq!(config.gain_every, 0);
    }
}
