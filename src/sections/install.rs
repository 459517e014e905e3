section_record! {
    /// The `[Install]` section, read by `systemctl enable`/`disable`.
    ///
    /// Every key is optional, so an unset record renders as a bare header.
    pub struct Install => "Install" {
        /// Targets that pull this unit in when enabled, e.g. `multi-user.target`.
        wanted_by: "WantedBy,omitempty",
        /// Like `WantedBy`, with a `Requires` dependency instead of `Wants`.
        required_by: "RequiredBy,omitempty",
        /// Extra names symlinked to the unit on enable.
        alias: "Alias,omitempty",
        /// Units enabled and disabled together with this one.
        also: "Also,omitempty",
        /// Instance name used when a template unit is enabled without one.
        default_instance: "DefaultInstance,omitempty",
    }
}
