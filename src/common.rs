// stdlib
pub(crate) use std::{
  fs, io,
  path::{Path, PathBuf},
  process,
};

// dependencies
pub(crate) use ::{
  cradle::prelude::*,
  regex::Regex,
  snafu::{OptionExt, ResultExt, Snafu},
  structopt::StructOpt,
  tracing_log::LogTracer,
  tracing_subscriber::{layer::SubscriberExt, EnvFilter},
};

// logging macros
#[allow(unused)]
pub(crate) use tracing::{error, info, span, trace, warn};

// modules
pub(crate) use crate::{cluster, conf, error, logging, paths, permissions, service};

// structs and enums
pub(crate) use crate::{arguments::Arguments, error::Error, service::ServiceAction};

// type aliases
pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;
