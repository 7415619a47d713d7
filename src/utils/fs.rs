use crate::types::{hash, NetworkIdentifier};
use crate::Result;
use log::debug;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const TEMP_DIR_PREFIX: &str = "rosetta-sdk";

/// Creates a new temporary directory. It is not removed automatically; call
/// [`remove_temp_dir`] when done with it.
pub fn create_temp_dir() -> Result<PathBuf> {
    let dir = tempfile::Builder::new()
        .prefix(TEMP_DIR_PREFIX)
        .tempdir()?
        .keep();
    debug!("Created temporary directory {}", dir.display());
    Ok(dir)
}

/// Removes a directory and everything in it.
pub fn remove_temp_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    fs::remove_dir_all(dir.as_ref())?;
    debug!("Removed temporary directory {}", dir.as_ref().display());
    Ok(())
}

/// Creates `path` and any missing parents, readable only by the current
/// user.
pub fn ensure_path_exists<P: AsRef<Path>>(path: P) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(path)?;
    Ok(())
}

/// Writes `value` to `path` as indented JSON.
pub fn serialize_and_write<P: AsRef<Path>, T: Serialize + ?Sized>(
    path: P,
    value: &T,
) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Reads a JSON value of type `T` from `path`. Fails if the file holds
/// fields `T` does not define.
pub fn load_and_parse<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T> {
    let file = fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Like [`load_and_parse`], but writes the result into `dest`. On failure
/// `dest` is left untouched.
pub fn load_and_parse_into<P: AsRef<Path>, T: DeserializeOwned>(
    path: P,
    dest: &mut T,
) -> Result<()> {
    *dest = load_and_parse(path)?;
    Ok(())
}

/// Returns `data_dir/cmd/<network hash>`, creating it if needed. Gives each
/// command a separate directory per network.
pub fn create_command_path<P: AsRef<Path>>(
    data_dir: P,
    cmd: &str,
    network: &NetworkIdentifier,
) -> Result<PathBuf> {
    let path = data_dir.as_ref().join(cmd).join(hash(network)?);
    ensure_path_exists(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Block, Currency};
    use crate::Error;

    #[test]
    fn create_and_remove_temp_dir() -> Result<()> {
        let dir = create_temp_dir()?;
        assert!(dir.exists());

        let custom = dir.join("test").join("test2");
        assert!(!custom.exists());

        ensure_path_exists(&custom)?;
        assert!(fs::metadata(dir.join("test"))?.is_dir());
        assert!(fs::metadata(&custom)?.is_dir());

        // idempotent
        ensure_path_exists(&custom)?;

        let curr = Currency::new("BTC", 8);
        let curr_path = custom.join("curr.json");
        serialize_and_write(&curr_path, &curr)?;
        assert!(curr_path.exists());

        let loaded: Currency = load_and_parse(&curr_path)?;
        assert_eq!(loaded, curr);

        let mut block = Block::default();
        let res = load_and_parse_into(&curr_path, &mut block);
        assert!(matches!(res, Err(Error::Json(_))));
        assert_eq!(block, Block::default());

        remove_temp_dir(&dir)?;
        assert!(!dir.exists());
        assert!(!custom.exists());
        assert!(!curr_path.exists());
        Ok(())
    }

    #[test]
    fn command_path() -> Result<()> {
        let dir = create_temp_dir()?;
        let network = NetworkIdentifier::new("Bitcoin", "Mainnet");

        let path = create_command_path(&dir, "test", &network)?;
        assert_eq!(path, dir.join("test").join(hash(&network)?));
        assert!(path.is_dir());

        remove_temp_dir(&dir)?;
        assert!(!dir.exists());
        Ok(())
    }

    #[test]
    fn missing_file() {
        let res: Result<Currency> = load_and_parse("/nonexistent/curr.json");
        assert!(matches!(res, Err(Error::Io(_))));
    }
}
