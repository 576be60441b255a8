#[cfg(test)]
pub mod fixtures {
    use crate::ResmanContext;
    use crate::fs::DiskFs;
    use crate::tracking::Manifest;
    use anyhow::Result;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// A throwaway resource root with an `images/` directory
    pub struct TestResources {
        pub temp_dir: TempDir,
        pub ctx: ResmanContext,
    }

    impl TestResources {
        pub fn new() -> Result<Self> {
            let temp_dir = tempfile::tempdir()?;
            fs::create_dir_all(temp_dir.path().join("images"))?;

            let ctx = ResmanContext::with_root(temp_dir.path())?;

            Ok(Self { temp_dir, ctx })
        }

        pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
            let path = self.temp_dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, content)?;
            Ok(path)
        }

        pub fn create_image(&self, name: &str) -> Result<PathBuf> {
            self.create_file(&format!("images/{name}"), "farbfeld")
        }

        pub fn manifest(&self) -> Result<Manifest> {
            let disk = DiskFs::new(self.temp_dir.path());
            Manifest::load(&disk, &self.ctx.config.manifest_path)
        }
    }
}
