section_record! {
    /// The `[Service]` section: how the service is started, supervised,
    /// sandboxed and resource-limited.
    ///
    /// `ExecStart` is always written, even when empty. Values are passed
    /// through verbatim; systemd booleans may be `yes`/`no`/`true`/`false`.
    pub struct Service => "Service" {
        /// `simple`, `exec`, `forking`, `oneshot`, `dbus`, `notify` or `idle`.
        r#type: "Type,omitempty",
        /// Main command of the service.
        exec_start: "ExecStart",
        exec_start_pre: "ExecStartPre,omitempty",
        exec_start_post: "ExecStartPost,omitempty",
        exec_stop: "ExecStop,omitempty",
        exec_reload: "ExecReload,omitempty",
        /// Keep the service active after its main process exits.
        remain_after_exit: "RemainAfterExit,omitempty",
        /// Restart policy: `no`, `always`, `on-success`, `on-failure`, ...
        restart: "Restart,omitempty",
        timeout_sec: "TimeoutSec,omitempty",
        timeout_start_sec: "TimeoutStartSec,omitempty",
        timeout_stop_sec: "TimeoutStopSec,omitempty",
        /// Space-separated `NAME=value` assignments.
        environment: "Environment,omitempty",
        environment_file: "EnvironmentFile,omitempty",
        working_directory: "WorkingDirectory,omitempty",
        root_directory: "RootDirectory,omitempty",
        user: "User,omitempty",
        group: "Group,omitempty",
        /// File mode creation mask, e.g. `0022`.
        umask: "UMask,omitempty",
        standard_error: "StandardError,omitempty",
        standard_input: "StandardInput,omitempty",
        /// `inherit`, `null`, `tty`, `journal`, `kmsg`, `file:path`, ...
        standard_output: "StandardOutput,omitempty",
        limit_nofile: "LimitNOFILE,omitempty",
        limit_nproc: "LimitNPROC,omitempty",
        restart_sec: "RestartSec,omitempty",
        success_exit_status: "SuccessExitStatus,omitempty",
        restart_prevent_exit_status: "RestartPreventExitStatus,omitempty",
        restart_force_exit_status: "RestartForceExitStatus,omitempty",
        permissions_start_only: "PermissionsStartOnly,omitempty",
        root_directory_start_only: "RootDirectoryStartOnly,omitempty",
        non_blocking: "NonBlocking,omitempty",
        /// Which processes may send `sd_notify` messages: `none`, `main`, `exec` or `all`.
        notify_access: "NotifyAccess,omitempty",
        sockets: "Sockets,omitempty",
        success_action: "SuccessAction,omitempty",
        failure_action: "FailureAction,omitempty",
        cpu_weight: "CPUWeight,omitempty",
        startup_cpu_weight: "StartupCPUWeight,omitempty",
        cpu_quota: "CPUQuota,omitempty",
        memory_limit: "MemoryLimit,omitempty",
        tasks_max: "TasksMax,omitempty",
        ambient_capabilities: "AmbientCapabilities,omitempty",
        capability_bounding_set: "CapabilityBoundingSet,omitempty",
        /// `true`, `full` or `strict`.
        protect_system: "ProtectSystem,omitempty",
        protect_home: "ProtectHome,omitempty",
        private_tmp: "PrivateTmp,omitempty",
        private_devices: "PrivateDevices,omitempty",
        private_network: "PrivateNetwork,omitempty",
        read_write_paths: "ReadWritePaths,omitempty",
        read_only_paths: "ReadOnlyPaths,omitempty",
        inaccessible_paths: "InaccessiblePaths,omitempty",
        no_new_privileges: "NoNewPrivileges,omitempty",
    }
}
