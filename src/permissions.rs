use crate::common::*;

pub(crate) fn harden(path: &Path, account: &str) -> Result<()> {
  let () = run_result!("chown", "-R", format!("{0}:{0}", account), path)?;
  let () = run_result!(%"chmod -R 0700", path)?;

  Ok(())
}
