use crate::common::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum Error {
  #[snafu(context(false), display("Command failed: {}", source))]
  Command { source: cradle::Error },
  #[snafu(display("Failed to create data directory `{}`: {}", path.display(), source))]
  DataDirectoryCreate { path: PathBuf, source: io::Error },
  #[snafu(display("Data directory `{}` is not valid unicode", path.display()))]
  DataDirectoryUnicodeDecode { path: PathBuf },
  #[snafu(display("Failed to read `{}`: {}", path.display(), source))]
  ConfRead { path: PathBuf, source: io::Error },
  #[snafu(display("Failed to write `{}`: {}", path.display(), source))]
  ConfWrite { path: PathBuf, source: io::Error },
  #[snafu(display("No `data_directory` setting in `{}`", path.display()))]
  ConfDataDirectoryMissing { path: PathBuf },
  #[snafu(display("Failed to copy `{}` to `{}`: {}", from.display(), to.display(), source))]
  CertificateCopy {
    from:   PathBuf,
    to:     PathBuf,
    source: io::Error,
  },
}
