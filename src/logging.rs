use crate::common::*;

pub(crate) fn init() {
  use tracing_subscriber::fmt::Layer;

  let subscriber = tracing_subscriber::registry()
    .with(EnvFilter::from_default_env())
    .with(Layer::new().with_writer(io::stderr));

  LogTracer::init().expect("Failed to initialize log tracer");

  tracing::subscriber::set_global_default(subscriber)
    .expect("Failed to set global default tracing subscriber");

  info!("Logging initialized.");
}
