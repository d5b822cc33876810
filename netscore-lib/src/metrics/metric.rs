use strum::{Display, EnumIter};

/// The five base metrics, declared in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Metric {
    RampUp,
    Correctness,
    BusFactor,
    ResponsiveMaintainer,
    License,
}

impl Metric {
    /// Key under which the metric's score is reported.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RampUp => "RampUp",
            Self::Correctness => "Correctness",
            Self::BusFactor => "BusFactor",
            Self::ResponsiveMaintainer => "ResponsiveMaintainer",
            Self::License => "License",
        }
    }

    /// Key under which the metric's latency is reported.
    #[must_use]
    pub const fn latency_key(self) -> &'static str {
        match self {
            Self::RampUp => "RampUp_Latency",
            Self::Correctness => "Correctness_Latency",
            Self::BusFactor => "BusFactor_Latency",
            Self::ResponsiveMaintainer => "ResponsiveMaintainer_Latency",
            Self::License => "License_Latency",
        }
    }
}
