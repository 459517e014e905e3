section_record! {
    /// The optional `[Socket]` section describing socket activation.
    pub struct Socket => "Socket" {
        /// Stream socket: a path, `port`, or `address:port`.
        listen_stream: "ListenStream,omitempty",
        /// Datagram socket, same address forms as `ListenStream`.
        listen_datagram: "ListenDatagram,omitempty",
        listen_sequential_packet: "ListenSequentialPacket,omitempty",
        /// Named pipe path.
        listen_fifo: "ListenFIFO,omitempty",
        /// Special file such as a character device.
        listen_special: "ListenSpecial,omitempty",
        listen_netlink: "ListenNetlink,omitempty",
        /// POSIX message queue name.
        listen_message_queue: "ListenMessageQueue,omitempty",
        /// Access mode of the socket file, e.g. `0660`.
        socket_mode: "SocketMode,omitempty",
        socket_user: "SocketUser,omitempty",
        socket_group: "SocketGroup,omitempty",
        socket_protocol: "SocketProtocol,omitempty",
        bind_to_device: "BindToDevice,omitempty",
        /// Service unit activated by traffic on the socket.
        service: "Service,omitempty",
        pass_credentials: "PassCredentials,omitempty",
        pass_security: "PassSecurity,omitempty",
        receive_buffer: "ReceiveBuffer,omitempty",
        send_buffer: "SendBuffer,omitempty",
        max_connections: "MaxConnections,omitempty",
        max_connections_per_source: "MaxConnectionsPerSource,omitempty",
        keep_alive: "KeepAlive,omitempty",
        keep_alive_time_sec: "KeepAliveTimeSec,omitempty",
        keep_alive_interval_sec: "KeepAliveIntervalSec,omitempty",
        keep_alive_probes: "KeepAliveProbes,omitempty",
        no_delay: "NoDelay,omitempty",
        priority: "Priority,omitempty",
        defer_accept_sec: "DeferAcceptSec,omitempty",
        /// Spawn one service instance per connection when true.
        accept: "Accept,omitempty",
        writable: "Writable,omitempty",
        trigger_limit_interval_sec: "TriggerLimitIntervalSec,omitempty",
        trigger_limit_burst: "TriggerLimitBurst,omitempty",
    }
}
