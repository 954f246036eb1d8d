use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::package_dir;

/// File-creation capability supplied by the host build.
///
/// Each call hands out a fresh writable sink for one compilation unit.
/// A unit exists only once its sink has been flushed successfully. A sink
/// dropped before that, or whose flush failed, leaves nothing behind.
pub trait Filer {
    /// Create a new compilation unit named `file_name` inside `package`.
    ///
    /// Creating the same unit twice within one invocation fails with
    /// [`io::ErrorKind::AlreadyExists`], even if the first attempt failed.
    fn create_compilation_unit(
        &mut self,
        package: &str,
        file_name: &str,
    ) -> io::Result<Box<dyn Write + '_>>;
}

/// Relative path of a compilation unit, using `/` separators.
pub fn unit_path(package: &str, file_name: &str) -> String {
    if package.is_empty() {
        file_name.to_string()
    } else {
        format!("{}/{}", package.replace('.', "/"), file_name)
    }
}

fn recreate_error(path: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("attempt to recreate compilation unit '{}'", path),
    )
}

/// Writes compilation units below a source root directory.
///
/// Package segments become directories, e.g. `com.example` + `Foo.java`
/// lands in `<root>/com/example/Foo.java`. Content is buffered and written
/// to a temporary sibling on flush, then renamed into place, so a failed
/// write never leaves a truncated source file.
#[derive(Debug)]
pub struct DirFiler {
    root: PathBuf,
    claimed: BTreeSet<PathBuf>,
    created: Vec<PathBuf>,
}

impl DirFiler {
    /// Create a filer rooted at `root`. The directory is created lazily.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            claimed: BTreeSet::new(),
            created: Vec::new(),
        }
    }

    /// The source root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files written successfully so far, in commit order.
    pub fn created(&self) -> &[PathBuf] {
        &self.created
    }
}

impl Filer for DirFiler {
    fn create_compilation_unit(
        &mut self,
        package: &str,
        file_name: &str,
    ) -> io::Result<Box<dyn Write + '_>> {
        let path = self.root.join(package_dir(package)).join(file_name);
        if !self.claimed.insert(path.clone()) {
            return Err(recreate_error(&path.display().to_string()));
        }

        Ok(Box::new(DirSink {
            created: &mut self.created,
            path,
            buffer: Vec::new(),
            committed: false,
        }))
    }
}

struct DirSink<'a> {
    created: &'a mut Vec<PathBuf>,
    path: PathBuf,
    buffer: Vec<u8>,
    committed: bool,
}

impl DirSink<'_> {
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path.with_file_name(format!(".{name}.tmp"))
    }

    fn commit(&mut self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp = self.temp_path();
        let written = fs::write(&temp, &self.buffer).and_then(|()| fs::rename(&temp, &self.path));
        if let Err(err) = written {
            let _ = fs::remove_file(&temp);
            return Err(err);
        }

        self.created.push(self.path.clone());
        self.committed = true;
        Ok(())
    }
}

impl Write for DirSink<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.committed {
            return Err(io::Error::other("compilation unit already committed"));
        }
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.committed {
            return Ok(());
        }
        self.commit()
    }
}

/// Keeps compilation units in memory, keyed by their relative path.
///
/// Used for previews, validation-only runs and tests.
#[derive(Debug, Default)]
pub struct MemoryFiler {
    claimed: BTreeSet<String>,
    units: BTreeMap<String, String>,
}

impl MemoryFiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the content of a unit by relative path (e.g. `p/Foo$ARouter.java`).
    pub fn get(&self, path: &str) -> Option<&str> {
        self.units.get(path).map(String::as_str)
    }

    /// All units sorted by path.
    pub fn units(&self) -> impl Iterator<Item = (&str, &str)> {
        self.units.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Consume the filer, returning the units sorted by path.
    pub fn into_units(self) -> Vec<(String, String)> {
        self.units.into_iter().collect()
    }
}

impl Filer for MemoryFiler {
    fn create_compilation_unit(
        &mut self,
        package: &str,
        file_name: &str,
    ) -> io::Result<Box<dyn Write + '_>> {
        let key = unit_path(package, file_name);
        if !self.claimed.insert(key.clone()) {
            return Err(recreate_error(&key));
        }

        Ok(Box::new(MemorySink {
            units: &mut self.units,
            key,
            buffer: Vec::new(),
        }))
    }
}

struct MemorySink<'a> {
    units: &'a mut BTreeMap<String, String>,
    key: String,
    buffer: Vec<u8>,
}

impl Write for MemorySink<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let content = String::from_utf8_lossy(&self.buffer).into_owned();
        self.units.insert(self.key.clone(), content);
        Ok(())
    }
}
