//! Counters reported by the runtime.

/// What the most recent `advance` did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Particles that received an `update` call.
    pub particles_updated: u32,
    /// Particles removed because `update` signaled completion.
    pub particles_expired: u32,
    /// Instances removed because their particle list became empty.
    pub instances_drained: u32,
}

/// Totals since the runtime was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeStats {
    /// Completed `advance` calls.
    pub ticks: u64,
    /// Successful `trigger` calls.
    pub instances_triggered: u64,
    /// Instances removed by `cancel` / `cancel_all`.
    pub instances_cancelled: u64,
    /// Instances that ran out of particles (including empty spawns).
    pub instances_drained: u64,
    /// Particles returned by `create`.
    pub particles_spawned: u64,
    /// Particles removed by `update`.
    pub particles_expired: u64,
    /// The last tick.
    pub last_tick: TickStats,
}

impl RuntimeStats {
    pub(crate) fn record_tick(&mut self, tick: TickStats) {
        self.ticks += 1;
        self.instances_drained += u64::from(tick.instances_drained);
        self.particles_expired += u64::from(tick.particles_expired);
        self.last_tick = tick;
    }
}
