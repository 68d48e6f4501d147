//! Headless console
//!
//! One panel intent (or port/status event) per input line. Port and status
//! lines are published on the event bus so they reach the panel through its
//! subscription, the same way a connection manager would deliver them.

use anyhow::{anyhow, bail, Context};
use jogkit_communication::{parse_status_line, Transport};
use jogkit_core::{AppEvent, Axis, AxisSet, EventBus, JogDirection, StatusReport};
use jogkit_settings::Config;
use jogkit_ui::{AxesPanel, IntentOutcome, PanelError, PanelIntent, ParameterAction};
use std::sync::Arc;

/// Help text listing every command
pub const HELP: &str = "\
port [name]                      set or clear the active port
status <json>                    apply a status broadcast
grbl <status line>               apply a raw GRBL status report
gotozero|zero|unzero <axes|all>  zero commands, e.g. `zero xy`
jog <x|y|z><+|->                 jog one step, e.g. `jog z-`
feed|distance <+|-|reset|value>  edit a jog parameter
unit | collapse                  toggle display unit or panel
home | units-sync                not supported yet
show                             print the position readout
quit";

/// A parsed console line
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    /// Publish a port change; `None` clears the port
    Port(Option<String>),
    /// Publish a status broadcast
    Status(StatusReport),
    Intent(PanelIntent),
    Show,
    Help,
    Quit,
}

fn parameter_action(arg: &str) -> anyhow::Result<ParameterAction> {
    Ok(match arg {
        "+" => ParameterAction::Increase,
        "-" => ParameterAction::Decrease,
        "reset" => ParameterAction::Reset,
        value => ParameterAction::Set(
            value
                .parse()
                .with_context(|| format!("Not a number: {}", value))?,
        ),
    })
}

fn jog_intent(arg: &str) -> anyhow::Result<PanelIntent> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(d), None) => Ok(PanelIntent::Jog {
            axis: Axis::try_from(a).map_err(|e| anyhow!(e))?,
            direction: JogDirection::try_from(d).map_err(|e| anyhow!(e))?,
        }),
        _ => bail!("Expected <axis><+|->, got {:?}", arg),
    }
}

fn axes(arg: &str) -> anyhow::Result<AxisSet> {
    arg.parse::<AxisSet>().map_err(|e| anyhow!(e))
}

/// Parse one input line; blank lines and `#` comments yield `None`
pub fn parse_line(line: &str) -> anyhow::Result<Option<ConsoleCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match (word.to_ascii_lowercase().as_str(), rest) {
        ("port", "") => ConsoleCommand::Port(None),
        ("port", name) => ConsoleCommand::Port(Some(name.to_string())),
        ("status", json) => ConsoleCommand::Status(
            StatusReport::from_json(json).context("Invalid status payload")?,
        ),
        ("grbl", status_line) => ConsoleCommand::Status(parse_status_line(status_line)?),
        ("gotozero", arg) => ConsoleCommand::Intent(PanelIntent::GoToZero(axes(arg)?)),
        ("zero", arg) => ConsoleCommand::Intent(PanelIntent::ZeroOut(axes(arg)?)),
        ("unzero", arg) => ConsoleCommand::Intent(PanelIntent::UnZeroOut(axes(arg)?)),
        ("jog", arg) => ConsoleCommand::Intent(jog_intent(arg)?),
        ("feed", arg) => ConsoleCommand::Intent(PanelIntent::FeedRate(parameter_action(arg)?)),
        ("distance", arg) => {
            ConsoleCommand::Intent(PanelIntent::Distance(parameter_action(arg)?))
        }
        ("unit", "") => ConsoleCommand::Intent(PanelIntent::ToggleUnit),
        ("collapse", "") => ConsoleCommand::Intent(PanelIntent::ToggleCollapse),
        ("home", "") => ConsoleCommand::Intent(PanelIntent::HomingSequence),
        ("units-sync", "") => ConsoleCommand::Intent(PanelIntent::SyncMachineUnits),
        ("show", "") => ConsoleCommand::Show,
        ("help", "") => ConsoleCommand::Help,
        ("quit", "") | ("exit", "") => ConsoleCommand::Quit,
        (other, _) => bail!("Unknown command: {}", other),
    };
    Ok(Some(command))
}

/// Panel plus the bus that feeds it
pub struct Console<T: Transport> {
    bus: Arc<EventBus>,
    panel: AxesPanel<T>,
}

impl<T: Transport> Console<T> {
    pub fn new(config: &Config, transport: T) -> anyhow::Result<Self> {
        let bus = Arc::new(EventBus::new());
        let panel = AxesPanel::attach(config, transport, &bus)?;
        Ok(Self { bus, panel })
    }

    pub fn panel(&self) -> &AxesPanel<T> {
        &self.panel
    }

    /// Run one command, returning a line of feedback for the operator
    pub fn execute(&mut self, command: ConsoleCommand) -> anyhow::Result<Option<String>> {
        match command {
            ConsoleCommand::Port(port) => {
                self.bus.publish(AppEvent::port_changed(port))?;
                Ok(None)
            }
            ConsoleCommand::Status(report) => {
                self.bus.publish(AppEvent::status(report))?;
                Ok(None)
            }
            ConsoleCommand::Intent(intent) => match self.panel.dispatch(intent) {
                Ok(outcome) => Ok(describe(&outcome)),
                Err(e @ PanelError::NotSupported { .. }) => Ok(Some(e.to_string())),
                Err(e) => Err(e.into()),
            },
            ConsoleCommand::Show => Ok(Some(serde_json::to_string(&self.panel.display())?)),
            ConsoleCommand::Help => Ok(Some(HELP.to_string())),
            ConsoleCommand::Quit => Ok(None),
        }
    }
}

fn describe(outcome: &IntentOutcome) -> Option<String> {
    match outcome {
        IntentOutcome::Sent(_) | IntentOutcome::Idle => None,
        IntentOutcome::Suppressed(seq) => Some(format!("not connected, dropped: {}", seq)),
        IntentOutcome::ParameterChanged(value) => Some(value.to_string()),
        IntentOutcome::UnitChanged(unit) => Some(format!("display unit: {}", unit)),
        IntentOutcome::CollapseChanged(collapsed) => Some(format!("collapsed: {}", collapsed)),
    }
}
