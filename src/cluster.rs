use crate::common::*;

// Interpolated by psql itself, with identifier and literal quoting, so credentials
// never pass through string formatting.
const CREATE_ADMINISTRATOR: &str =
  r#"CREATE USER :"dbuser" WITH SUPERUSER PASSWORD :'dbpassword';"#;

pub(crate) fn create(arguments: &Arguments) -> Result<()> {
  let data_directory = arguments.data_directory();
  let account = arguments.service_account.as_str();
  let version = arguments.dbversion.as_str();

  info!("Creating data directory `{}`.", data_directory.display());

  create_data_directory(&data_directory)?;

  permissions::harden(&data_directory, account)?;

  info!("Initializing cluster.");

  let () = run_result!(
    "runuser",
    "-u",
    account,
    "--",
    paths::binary(version, "initdb"),
    %"--auth=trust --encoding=UTF8",
    format!("--pgdata={}", data_directory.display()),
    // runuser keeps the caller's working directory, which the service account cannot read
    CurrentDir("/")
  )?;

  install_certificate(
    &arguments.certificate,
    &data_directory.join("server.crt"),
    account,
  )?;

  install_certificate(
    &arguments.certificate_key,
    &data_directory.join("server.key"),
    account,
  )?;

  service::configure(&data_directory, version, ServiceAction::Start)?;

  info!("Creating administrator role `{}`.", arguments.dbuser);

  let () = run_result!(
    "runuser",
    "-u",
    account,
    "--",
    paths::binary(version, "psql"),
    "--set=ON_ERROR_STOP=1",
    format!("--set=dbuser={}", arguments.dbuser),
    format!("--set=dbpassword={}", arguments.dbpassword),
    Stdin(CREATE_ADMINISTRATOR),
    CurrentDir("/")
  )?;

  info!("Creating database `{}`.", arguments.db_name);

  let () = run_result!(
    "runuser",
    "-u",
    account,
    "--",
    paths::binary(version, "createdb"),
    "-O",
    arguments.dbuser.as_str(),
    arguments.db_name.as_str(),
    CurrentDir("/")
  )?;

  service::control(ServiceAction::Stop)
}

fn create_data_directory(path: &Path) -> Result<()> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).context(error::DataDirectoryCreate { path: parent })?;
  }

  // a leftover data directory may hold a live cluster, so refuse to reuse it
  fs::create_dir(path).context(error::DataDirectoryCreate { path })?;

  Ok(())
}

fn install_certificate(from: &Path, to: &Path, account: &str) -> Result<()> {
  info!("Installing `{}` as `{}`.", from.display(), to.display());

  fs::copy(from, to).context(error::CertificateCopy { from, to })?;

  permissions::harden(to, account)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn create_data_directory_creates_parents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("postgresql/15/main");

    create_data_directory(&path).unwrap();

    assert!(path.is_dir());
  }

  #[test]
  fn create_data_directory_rejects_existing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main");

    create_data_directory(&path).unwrap();

    assert!(matches!(
      create_data_directory(&path),
      Err(Error::DataDirectoryCreate { .. })
    ));
  }

  #[test]
  fn install_certificate_requires_source() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
      install_certificate(
        &dir.path().join("missing.pem"),
        &dir.path().join("server.crt"),
        "postgres",
      ),
      Err(Error::CertificateCopy { .. })
    ));
  }
}
