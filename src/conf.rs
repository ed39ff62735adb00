use crate::common::*;

pub(crate) fn set_data_directory(conf: &Path, data_directory: &Path) -> Result<()> {
  let data_directory = data_directory
    .to_str()
    .context(error::DataDirectoryUnicodeDecode {
      path: data_directory,
    })?;

  let text = fs::read_to_string(conf).context(error::ConfRead { path: conf })?;

  let rewritten =
    rewrite(&text, data_directory).context(error::ConfDataDirectoryMissing { path: conf })?;

  fs::write(conf, rewritten).context(error::ConfWrite { path: conf })?;

  info!("Set `data_directory = '{}'` in `{}`.", data_directory, conf.display());

  Ok(())
}

fn rewrite(text: &str, data_directory: &str) -> Option<String> {
  let pattern = Regex::new(r"(?m)^data_directory = .*$").unwrap();

  if !pattern.is_match(text) {
    return None;
  }

  let setting = format!("data_directory = '{}'", data_directory);

  Some(
    pattern
      .replace_all(text, regex::NoExpand(&setting))
      .into_owned(),
  )
}
