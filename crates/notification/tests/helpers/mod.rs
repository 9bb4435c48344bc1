use std::{
    io::{BufRead, BufReader, Write},
    net::{TcpListener, TcpStream},
    sync::{Arc, Mutex},
    thread,
};

use contact_desk_notification::{EmailConfig, NotifyInput, TlsMode};

/// Plain-text SMTP relay on a loopback port. Logs the verb of every command
/// it receives, plus `DATA-END` once a message body has been accepted.
pub struct FakeRelay {
    port: u16,
    log: Arc<Mutex<Vec<String>>>,
}

impl FakeRelay {
    pub fn start(accept_auth: bool) -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let log = Arc::new(Mutex::new(Vec::new()));

        let shared = log.clone();
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let log = shared.clone();
                thread::spawn(move || {
                    let _ = session(stream, accept_auth, &log);
                });
            }
        });

        Ok(Self { port, log })
    }

    pub fn config(&self) -> EmailConfig {
        EmailConfig {
            smtp_host: "127.0.0.1".to_owned(),
            smtp_port: self.port,
            smtp_username: "desk@example.com".to_owned(),
            smtp_password: "app-password".to_owned(),
            tls: TlsMode::None,
            contact_address: "owner@example.com".to_owned(),
            timeout_seconds: 5,
            ..Default::default()
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    pub fn count(&self, verb: &str) -> usize {
        self.commands().iter().filter(|c| *c == verb).count()
    }
}

fn session(stream: TcpStream, accept_auth: bool, log: &Mutex<Vec<String>>) -> std::io::Result<()> {
    let mut writer = stream.try_clone()?;
    let mut reader = BufReader::new(stream);
    let mut line = String::new();

    writer.write_all(b"220 relay.test ESMTP\r\n")?;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let verb = line
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_ascii_uppercase();
        log.lock().unwrap().push(verb.clone());

        let reply: &[u8] = match verb.as_str() {
            "EHLO" | "HELO" => b"250-relay.test\r\n250 AUTH PLAIN LOGIN\r\n",
            "AUTH" if accept_auth => b"235 2.7.0 Authentication successful\r\n",
            "AUTH" => b"535 5.7.8 Username and Password not accepted\r\n",
            "DATA" => {
                writer.write_all(b"354 End data with <CR><LF>.<CR><LF>\r\n")?;
                loop {
                    line.clear();
                    if reader.read_line(&mut line)? == 0 {
                        return Ok(());
                    }
                    if line == ".\r\n" {
                        break;
                    }
                }
                log.lock().unwrap().push("DATA-END".to_owned());
                b"250 2.0.0 queued\r\n"
            }
            "QUIT" => {
                writer.write_all(b"221 2.0.0 bye\r\n")?;
                return Ok(());
            }
            _ => b"250 2.0.0 ok\r\n",
        };

        writer.write_all(reply)?;
    }
}

pub fn input(name: &str) -> NotifyInput {
    NotifyInput {
        name: name.to_owned(),
        email: "jo@x.com".to_owned(),
        phone: "555-0100".to_owned(),
        message: "Hi".to_owned(),
    }
}
