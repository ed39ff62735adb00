use crate::common::*;

#[derive(Debug, StructOpt)]
#[structopt(about = "Provision a PostgreSQL cluster for a Galaxy deployment.")]
pub(crate) struct Arguments {
  /// Username of the Galaxy database administrator, as specified in galaxy.yml
  #[structopt(long)]
  pub(crate) dbuser: String,
  /// Password of the Galaxy database administrator, as specified in galaxy.yml
  #[structopt(long)]
  pub(crate) dbpassword: String,
  /// Name of the Galaxy database to create, as specified in galaxy.yml
  #[structopt(long)]
  pub(crate) db_name: String,
  /// Data directory of the new cluster, defaulting to the version's Debian cluster path
  #[structopt(long)]
  pub(crate) dbpath: Option<PathBuf>,
  /// PostgreSQL server major version
  #[structopt(long, default_value = "15")]
  pub(crate) dbversion: String,
  /// Operating system account that owns the cluster
  #[structopt(long, default_value = "postgres")]
  pub(crate) service_account: String,
  /// TLS certificate installed into the data directory as server.crt
  #[structopt(long, default_value = "/etc/ssl/certs/ssl-cert-snakeoil.pem")]
  pub(crate) certificate: PathBuf,
  /// TLS private key installed into the data directory as server.key
  #[structopt(long, default_value = "/etc/ssl/private/ssl-cert-snakeoil.key")]
  pub(crate) certificate_key: PathBuf,
}

impl Arguments {
  pub(crate) fn run(self) -> Result<()> {
    cluster::create(&self)
  }

  pub(crate) fn data_directory(&self) -> PathBuf {
    self
      .dbpath
      .clone()
      .unwrap_or_else(|| paths::default_data_directory(&self.dbversion))
  }
}
