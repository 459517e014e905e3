section_record! {
    /// The `[Unit]` section: description, documentation and ordering/dependency
    /// relations of the unit.
    ///
    /// `Description` is always written; every other key only when set.
    /// Dependency lists are space-separated unit names, as systemd expects.
    pub struct Unit => "Unit" {
        /// Human-readable name shown by `systemctl status`.
        description: "Description",
        /// Space-separated URIs (`man:`, `https:`, `file:`).
        documentation: "Documentation,omitempty",
        /// Units started together with this one; failure propagates.
        requires: "Requires,omitempty",
        /// Like `Requires`, but the listed units must already be active.
        requisite: "Requisite,omitempty",
        /// Units started together with this one; failure does not propagate.
        wants: "Wants,omitempty",
        /// Like `Requires`, and this unit also stops when they stop.
        binds_to: "BindsTo,omitempty",
        /// Stop and restart along with the listed units.
        part_of: "PartOf,omitempty",
        /// Units that cannot run at the same time as this one.
        conflicts: "Conflicts,omitempty",
        /// Start this unit before the listed ones.
        before: "Before,omitempty",
        /// Start this unit after the listed ones.
        after: "After,omitempty",
        /// Units activated when this one enters the failed state.
        on_failure: "OnFailure,omitempty",
        propagates_reload_to: "PropagatesReloadTo,omitempty",
        reload_propagated_from: "ReloadPropagatedFrom,omitempty",
        joins_namespace_of: "JoinsNamespaceOf,omitempty",
        /// Paths whose mount units this unit requires and orders after.
        requires_mounts_for: "RequiresMountsFor,omitempty",
        on_failure_job_mode: "OnFailureJobMode,omitempty",
        ignore_on_isolate: "IgnoreOnIsolate,omitempty",
        stop_when_unneeded: "StopWhenUnneeded,omitempty",
        refuse_manual_start: "RefuseManualStart,omitempty",
        refuse_manual_stop: "RefuseManualStop,omitempty",
        allow_isolate: "AllowIsolate,omitempty",
        /// Whether implicit dependencies on `basic.target`/`shutdown.target` are added.
        default_dependencies: "DefaultDependencies,omitempty",
        job_timeout_sec: "JobTimeoutSec,omitempty",
        job_timeout_action: "JobTimeoutAction,omitempty",
        start_limit_interval_sec: "StartLimitIntervalSec,omitempty",
        start_limit_action: "StartLimitAction,omitempty",
        condition: "Condition,omitempty",
        assert: "Assert,omitempty",
        /// Path of the configuration the unit was generated from.
        source_path: "SourcePath,omitempty",
    }
}
