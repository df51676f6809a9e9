// src/controllers/osc.rs
// OSC control surface for the live curve parameters

use nannou_osc as osc;

use crate::error::{CurvevisError, CurvevisResult};

#[derive(Debug, Clone, PartialEq)]
pub enum OscCommand {
    SetSpeed {
        speed: f32,
    },
    SetSize {
        size: f32,
        duration: f32, // 0.0 applies immediately
    },
    Reset,
    CurveColor {
        r: f32,
        g: f32,
        b: f32,
    },
    ToggleGrid,
    ExportFrame,
}

/// Numeric OSC argument as f32. Ints are accepted where floats are expected.
fn as_f32(arg: &osc::Type) -> Option<f32> {
    match arg {
        osc::Type::Float(v) => Some(*v),
        osc::Type::Double(v) => Some(*v as f32),
        osc::Type::Int(v) => Some(*v as f32),
        _ => None,
    }
}

/// Translates one OSC message into a command.
/// Returns None for unknown addresses or arguments that don't fit.
pub fn parse_message(addr: &str, args: &[osc::Type]) -> Option<OscCommand> {
    match addr {
        "/curve/speed" => match args {
            [speed] => Some(OscCommand::SetSpeed {
                speed: as_f32(speed)?,
            }),
            _ => None,
        },
        "/curve/size" => match args {
            [size] => Some(OscCommand::SetSize {
                size: as_f32(size)?,
                duration: 0.0,
            }),
            [size, duration] => Some(OscCommand::SetSize {
                size: as_f32(size)?,
                duration: as_f32(duration)?,
            }),
            _ => None,
        },
        "/curve/reset" => Some(OscCommand::Reset),
        "/curve/color" => match args {
            // alpha is accepted and ignored
            [r, g, b] | [r, g, b, _] => Some(OscCommand::CurveColor {
                r: as_f32(r)?,
                g: as_f32(g)?,
                b: as_f32(b)?,
            }),
            _ => None,
        },
        "/grid/toggle" => Some(OscCommand::ToggleGrid),
        "/frame/export" => Some(OscCommand::ExportFrame),
        _ => None,
    }
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> CurvevisResult<Self> {
        let receiver = osc::receiver(port)
            .map_err(|e| CurvevisError::osc(format!("failed to bind port {}: {}", port, e)))?;
        tracing::info!("listening for OSC on port {}", port);

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    /// Drains pending packets without blocking and queues their commands.
    pub fn process_messages(&mut self) {
        for (packet, addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match parse_message(&message.addr, &message.args) {
                    Some(command) => {
                        tracing::debug!(from = %addr, ?command, "osc command");
                        self.command_queue.push(command);
                    }
                    None => tracing::warn!(
                        "ignoring OSC message {} with args {:?}",
                        message.addr,
                        message.args
                    ),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

/// Sends commands to the controller, used to loop keyboard shortcuts back
/// through the same surface an external controller uses.
pub struct OscSender {
    sender: osc::Sender,
    target_addr: String,
    target_port: u16,
}

impl OscSender {
    pub fn new(target_port: u16) -> CurvevisResult<Self> {
        let target_addr = "127.0.0.1".to_string();
        let sender = osc::sender()
            .map_err(|e| CurvevisError::osc(format!("failed to create sender: {}", e)))?;

        Ok(Self {
            sender,
            target_addr,
            target_port,
        })
    }

    fn send(&self, addr: &str, args: Vec<osc::Type>) {
        if let Err(e) = self.sender.send(
            (addr.to_string(), args),
            (self.target_addr.as_str(), self.target_port),
        ) {
            tracing::warn!("failed to send OSC {}: {:?}", addr, e);
        }
    }

    pub fn send_speed(&self, speed: f32) {
        self.send("/curve/speed", vec![osc::Type::Float(speed)]);
    }

    pub fn send_size(&self, size: f32, duration: f32) {
        self.send(
            "/curve/size",
            vec![osc::Type::Float(size), osc::Type::Float(duration)],
        );
    }

    pub fn send_reset(&self) {
        self.send("/curve/reset", Vec::new());
    }

    pub fn send_curve_color(&self, r: f32, g: f32, b: f32) {
        self.send(
            "/curve/color",
            vec![
                osc::Type::Float(r),
                osc::Type::Float(g),
                osc::Type::Float(b),
            ],
        );
    }

    pub fn send_toggle_grid(&self) {
        self.send("/grid/toggle", Vec::new());
    }

    pub fn send_export_frame(&self) {
        self.send("/frame/export", Vec::new());
    }
}
