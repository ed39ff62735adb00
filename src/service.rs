use crate::common::*;

use ServiceAction::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ServiceAction {
  Start,
  Stop,
  Restart,
  Reload,
}

impl ServiceAction {
  pub(crate) fn as_str(self) -> &'static str {
    match self {
      Start => "start",
      Stop => "stop",
      Restart => "restart",
      Reload => "reload",
    }
  }
}

pub(crate) fn control(action: ServiceAction) -> Result<()> {
  info!("Requesting postgresql service {}.", action.as_str());

  Ok(run_result!(%"service postgresql", action.as_str())?)
}

pub(crate) fn configure(data_directory: &Path, version: &str, action: ServiceAction) -> Result<()> {
  conf::set_data_directory(&paths::conf(version), data_directory)?;
  control(action)
}
