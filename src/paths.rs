use crate::common::*;

pub(crate) fn conf(version: &str) -> PathBuf {
  PathBuf::from(format!("/etc/postgresql/{}/main/postgresql.conf", version))
}

pub(crate) fn binary(version: &str, name: &str) -> PathBuf {
  PathBuf::from(format!("/usr/lib/postgresql/{}/bin/{}", version, name))
}

pub(crate) fn default_data_directory(version: &str) -> PathBuf {
  PathBuf::from(format!("/var/lib/postgresql/{}/main", version))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn conf_path() {
    assert_eq!(
      conf("15"),
      Path::new("/etc/postgresql/15/main/postgresql.conf")
    );
    assert_eq!(
      conf("14"),
      Path::new("/etc/postgresql/14/main/postgresql.conf")
    );
  }

  #[test]
  fn binary_path() {
    assert_eq!(
      binary("15", "initdb"),
      Path::new("/usr/lib/postgresql/15/bin/initdb")
    );
    assert_eq!(
      binary("15", "createdb"),
      Path::new("/usr/lib/postgresql/15/bin/createdb")
    );
  }

  #[test]
  fn default_data_directory_path() {
    assert_eq!(
      default_data_directory("15"),
      Path::new("/var/lib/postgresql/15/main")
    );
  }
}
