//! A complete service unit file.
//!
//! Sections are always written in the order `Unit`, `Service`, `Install`,
//! then `Socket` when present and holding at least one value.
//!
//! Serializing collects the failures of every section before giving up;
//! deserializing stops at the first section that is missing or malformed,
//! checking `Unit`, `Service`, `Install` and then `Socket`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::{self, Document};
use crate::error::{EncodeFailures, Error};
use crate::options::{FormatOptions, Options, ParseOptions};
use crate::sections::{Install, SectionRecord, Service, Socket, Unit};

/// The typed contents of a `.service` unit file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Daemon {
    pub unit: Unit,
    pub service: Service,
    #[serde(default)]
    pub install: Install,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<Socket>,
}

impl Daemon {
    /// Render the unit file.
    ///
    /// No text is returned unless every section renders.
    pub fn render(&self, options: &FormatOptions) -> Result<String, Error> {
        let mut failures = EncodeFailures::default();
        let mut content = String::new();

        append_section(&mut content, &mut failures, &self.unit, options);
        append_section(&mut content, &mut failures, &self.service, options);
        append_section(&mut content, &mut failures, &self.install, options);
        // A listener with nothing set reads back as absent, so it is not written.
        if let Some(socket) = self.socket.as_ref().filter(|s| !s.assignments().is_empty()) {
            append_section(&mut content, &mut failures, socket, options);
        }

        if !failures.is_empty() {
            return Err(Error::Encode(failures));
        }

        Ok(content.trim().to_string())
    }

    /// Render with default options.
    pub fn to_unit_string(&self) -> Result<String, Error> {
        self.render(&FormatOptions::default())
    }

    /// Parse a unit file.
    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self, Error> {
        let document = Document::parse(text).map_err(Error::Parse)?;

        let unit = codec::decode_required::<Unit>(&document, options)?;
        let service = codec::decode_required::<Service>(&document, options)?;
        let install = codec::decode_required::<Install>(&document, options)?;
        let socket = codec::decode_optional::<Socket>(&document, options)?;

        debug!(socket = socket.is_some(), "decoded unit file");
        Ok(Self {
            unit,
            service,
            install,
            socket,
        })
    }
}

fn append_section<R: SectionRecord>(
    content: &mut String,
    failures: &mut EncodeFailures,
    record: &R,
    options: &FormatOptions,
) {
    match codec::encode_section(R::SECTION, &record.assignments(), options) {
        Ok(text) => content.push_str(&text),
        Err(e) => failures.push(R::SECTION, e),
    }
}

impl FromStr for Daemon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &ParseOptions::default())
    }
}

/// Render `daemon` as unit file text using default options.
pub fn marshal(daemon: &Daemon) -> Result<String, Error> {
    marshal_with(daemon, &Options::default())
}

pub fn marshal_with(daemon: &Daemon, options: &Options) -> Result<String, Error> {
    daemon.render(&options.format)
}

/// Parse unit file text using default options.
pub fn unmarshal(text: &str) -> Result<Daemon, Error> {
    unmarshal_with(text, &Options::default())
}

pub fn unmarshal_with(text: &str, options: &Options) -> Result<Daemon, Error> {
    Daemon::parse_with(text, &options.parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Delimiter;

    const EXAMPLE_AGENT: &str = include_str!("../testdata/example-agent.service");

    fn agent() -> Daemon {
        Daemon {
            unit: Unit {
                description: "Example Description of the Daemon.".into(),
                wants: "network.target".into(),
                after: "syslog.target network-online.target".into(),
                ..Default::default()
            },
            service: Service {
                r#type: "exec".into(),
                exec_start: "/usr/bin/example-agent".into(),
                standard_output: "journal".into(),
                standard_error: "journal".into(),
                ..Default::default()
            },
            install: Install {
                wanted_by: "multi-user.target".into(),
                ..Default::default()
            },
            socket: None,
        }
    }

    fn docker() -> Daemon {
        Daemon {
            unit: Unit {
                description: "Dedicated Server".into(),
                after: "docker.service".into(),
                requires: "docker.service".into(),
                part_of: "docker.service".into(),
                ..Default::default()
            },
            service: Service {
                user: "steam".into(),
                group: "steam".into(),
                r#type: "oneshot".into(),
                remain_after_exit: "yes".into(),
                working_directory: "/home/steam/.configuration".into(),
                exec_start_pre: "/usr/bin/docker compose pull".into(),
                exec_start: "/usr/bin/docker compose up --detach --remove-orphans".into(),
                exec_stop: "/usr/bin/docker compose down".into(),
                standard_output: "journal".into(),
                standard_error: "journal".into(),
                ..Default::default()
            },
            install: Install {
                wanted_by: "multi-user.target docker.service".into(),
                ..Default::default()
            },
            socket: None,
        }
    }

    #[test]
    fn test_marshal_agent_exact_output() {
        let text = marshal(&agent()).unwrap();
        assert_eq!(
            text,
            "[Unit]\n\
             Description = Example Description of the Daemon.\n\
             Wants = network.target\n\
             After = syslog.target network-online.target\n\
             \n\
             [Service]\n\
             Type = exec\n\
             ExecStart = /usr/bin/example-agent\n\
             StandardError = journal\n\
             StandardOutput = journal\n\
             \n\
             [Install]\n\
             WantedBy = multi-user.target"
        );
    }

    #[test]
    fn test_marshal_agent_has_three_headers_and_no_socket() {
        let text = marshal(&agent()).unwrap();
        let headers: Vec<&str> = text.lines().filter(|line| line.starts_with('[')).collect();
        assert_eq!(headers, vec!["[Unit]", "[Service]", "[Install]"]);
        assert!(!text.contains("[Socket]"));
    }

    #[test]
    fn test_marshal_tight_delimiter() {
        let options = Options {
            format: FormatOptions {
                delimiter: Delimiter::Tight,
            },
            ..Default::default()
        };
        let text = marshal_with(&docker(), &options).unwrap();
        assert!(text.starts_with("[Unit]\nDescription=Dedicated Server\n"));
        assert!(
            text.contains("\nExecStart=/usr/bin/docker compose up --detach --remove-orphans\n")
        );
        assert!(text.ends_with("[Install]\nWantedBy=multi-user.target docker.service"));
    }

    fn assert_unset_optional_keys_absent<R: SectionRecord>(record: &R, text: &str) {
        for spec in R::FIELDS.iter().filter(|spec| spec.optional()) {
            if !(spec.get)(record).is_empty() {
                continue;
            }
            let prefix = format!("{} =", spec.key());
            assert!(
                !text.lines().any(|line| line.starts_with(&prefix)),
                "unexpected [{}] {} line",
                R::SECTION,
                spec.key()
            );
        }
    }

    #[test]
    fn test_marshal_omits_unset_optional_fields() {
        let mut daemon = agent();
        daemon.socket = Some(Socket {
            listen_stream: "8080".into(),
            ..Default::default()
        });
        let text = marshal(&daemon).unwrap();

        assert_unset_optional_keys_absent(&daemon.unit, &text);
        assert_unset_optional_keys_absent(&daemon.service, &text);
        assert_unset_optional_keys_absent(&daemon.install, &text);
        assert_unset_optional_keys_absent(daemon.socket.as_ref().unwrap(), &text);
    }

    #[test]
    fn test_marshal_empty_socket_renders_as_absent() {
        let mut daemon = agent();
        daemon.socket = Some(Socket::default());

        let text = marshal(&daemon).unwrap();
        assert_eq!(text, marshal(&agent()).unwrap());
        assert!(!text.contains("[Socket]"));
    }

    #[test]
    fn test_round_trip_empty_socket() {
        let mut daemon = agent();
        daemon.socket = Some(Socket::default());

        let back = unmarshal(&marshal(&daemon).unwrap()).unwrap();
        assert_eq!(back, agent());
        assert!(back.socket.is_none());
    }

    #[test]
    fn test_marshal_keeps_empty_required_fields() {
        let text = marshal(&Daemon::default()).unwrap();
        assert_eq!(text, "[Unit]\nDescription =\n\n[Service]\nExecStart =\n\n[Install]");
    }

    #[test]
    fn test_marshal_socket_last() {
        let mut daemon = agent();
        daemon.socket = Some(Socket {
            listen_stream: "0.0.0.0:8080".into(),
            ..Default::default()
        });

        let text = marshal(&daemon).unwrap();
        assert!(text.ends_with(
            "[Install]\nWantedBy = multi-user.target\n\n[Socket]\nListenStream = 0.0.0.0:8080"
        ));
    }

    #[test]
    fn test_marshal_collects_every_failure() {
        let mut daemon = agent();
        daemon.unit.description = "line one\nline two".into();
        daemon.service.exec_start = "/bin/a\r\n/bin/b".into();
        daemon.socket = Some(Socket {
            service: "a\nb".into(),
            ..Default::default()
        });

        let Err(Error::Encode(failures)) = marshal(&daemon) else {
            panic!("expected an encode error");
        };
        let sections: Vec<&str> = failures.iter().map(|f| f.section).collect();
        assert_eq!(sections, vec!["Unit", "Service", "Socket"]);
    }

    #[test]
    fn test_marshal_rejects_whitespace_only_value() {
        let mut daemon = agent();
        daemon.service.user = " ".into();

        let Err(Error::Encode(failures)) = marshal(&daemon) else {
            panic!("expected an encode error");
        };
        assert_eq!(failures.len(), 1);
        assert!(failures.to_string().contains("'User'"));
    }

    #[test]
    fn test_round_trip() {
        for daemon in [agent(), docker()] {
            let text = marshal(&daemon).unwrap();
            assert_eq!(unmarshal(&text).unwrap(), daemon);
        }
    }

    #[test]
    fn test_round_trip_with_socket_and_tight_delimiter() {
        let mut daemon = docker();
        daemon.service.environment = "A=1 B=2".into();
        daemon.socket = Some(Socket {
            listen_stream: "/run/agent.sock".into(),
            socket_mode: "0660".into(),
            accept: "no".into(),
            ..Default::default()
        });

        let options = Options {
            format: FormatOptions {
                delimiter: Delimiter::Tight,
            },
            ..Default::default()
        };
        let text = marshal_with(&daemon, &options).unwrap();
        assert_eq!(unmarshal_with(&text, &options).unwrap(), daemon);
    }

    #[test]
    fn test_round_trip_keeps_empty_required_fields() {
        let daemon = Daemon::default();
        let text = marshal(&daemon).unwrap();
        assert_eq!(unmarshal(&text).unwrap(), daemon);
    }

    #[test]
    fn test_round_trip_every_field() {
        let mut daemon = Daemon {
            socket: Some(Socket::default()),
            ..Default::default()
        };
        fill(&mut daemon.unit);
        fill(&mut daemon.service);
        fill(&mut daemon.install);
        if let Some(socket) = daemon.socket.as_mut() {
            fill(socket);
        }

        let text = marshal(&daemon).unwrap();
        assert_eq!(unmarshal(&text).unwrap(), daemon);
    }

    fn fill<R: SectionRecord>(record: &mut R) {
        for spec in R::FIELDS {
            (spec.set)(record, format!("{}-value", spec.field));
        }
    }

    #[test]
    fn test_unmarshal_fixture() {
        let daemon: Daemon = EXAMPLE_AGENT.parse().unwrap();
        assert_eq!(daemon.unit.description, "Example Description of the Daemon.");
        assert_eq!(daemon.unit.after, "syslog.target network-online.target");
        assert_eq!(
            daemon.service.exec_start,
            "/usr/bin/example-agent --config /etc/example-agent/config.toml"
        );
        assert_eq!(daemon.service.environment, "AGENT_MODE=production AGENT_LOG=info");
        assert_eq!(daemon.install.wanted_by, "multi-user.target");
        assert!(daemon.socket.is_none());
    }

    #[test]
    fn test_unmarshal_missing_required_sections() {
        let cases = [
            ("Unit", "[Service]\nExecStart=/bin/a\n\n[Install]\n"),
            ("Service", "[Unit]\nDescription=a\n\n[Install]\n"),
            ("Install", "[Unit]\nDescription=a\n\n[Service]\nExecStart=/bin/a\n"),
        ];

        for (section, text) in cases {
            match unmarshal(text) {
                Err(Error::MissingSection { section: missing }) => assert_eq!(missing, section),
                other => panic!("expected missing [{section}], got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unmarshal_checks_unit_first() {
        let error = unmarshal("[Socket]\nListenStream=80\n").unwrap_err();
        assert_eq!(error.section(), Some("Unit"));
    }

    #[test]
    fn test_unmarshal_empty_socket_is_absent() {
        let text = "[Unit]\nDescription=a\n\n[Service]\nExecStart=/bin/a\n\n[Install]\n\n[Socket]\n";
        let daemon = unmarshal(text).unwrap();
        assert!(daemon.socket.is_none());
    }

    #[test]
    fn test_unmarshal_populated_socket() {
        let text = "[Unit]\nDescription=a\n[Service]\nExecStart=/bin/a\n[Install]\n[Socket]\nListenStream = 8080\n";
        let daemon = unmarshal(text).unwrap();
        assert_eq!(daemon.socket.unwrap().listen_stream, "8080");
    }

    #[test]
    fn test_unmarshal_strict_malformed_socket() {
        let text = "[Unit]\nDescription=a\n[Service]\nExecStart=/bin/a\n[Install]\n[Socket]\nListen=80\n";
        let options = Options {
            parse: ParseOptions { strict: true },
            ..Default::default()
        };

        let error = unmarshal_with(text, &options).unwrap_err();
        assert!(matches!(
            error,
            Error::MalformedSection {
                section: "Socket",
                ..
            }
        ));
        // Leniently the unknown key is dropped but the section still counts.
        assert_eq!(unmarshal(text).unwrap().socket, Some(Socket::default()));
    }

    #[test]
    fn test_unmarshal_parse_error() {
        let error = unmarshal("[Unit\nDescription=a\n").unwrap_err();
        assert!(matches!(error, Error::Parse(ref e) if e.line == 1));
    }

    #[test]
    fn test_serde_json_round_trip() {
        let mut daemon = agent();
        daemon.socket = Some(Socket {
            listen_stream: "8080".into(),
            ..Default::default()
        });

        let json = serde_json::to_string(&daemon).unwrap();
        let decoded: Daemon = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, daemon);
    }
}
