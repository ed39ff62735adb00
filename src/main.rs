mod arguments;
mod cluster;
mod common;
mod conf;
mod error;
mod logging;
mod paths;
mod permissions;
mod service;

fn main() {
  use crate::common::*;

  logging::init();

  if let Err(error) = Arguments::from_args().run() {
    use ansi_term::{Color, Style};
    let red = Style::new().fg(Color::Red).bold();
    let bold = Style::new().bold();
    eprintln!("{}: {}", red.paint("error"), bold.paint(error.to_string()));
    process::exit(1);
  }
}
