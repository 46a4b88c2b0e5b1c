use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::CodecError;
use crate::scene::Scene;

/// Writes `scene` to `path`, replacing any existing file.
///
/// A failure part way through leaves an incomplete file behind; it is
/// reported, not retried.
pub fn store_to_file(scene: &Scene, path: impl AsRef<Path>) -> Result<(), CodecError> {
    let path = path.as_ref();
    let result = File::create(path).map_err(CodecError::from).and_then(|file| {
        let mut out = BufWriter::new(file);
        let written = super::write_to(scene, &mut out)?;
        out.flush()?;
        Ok(written)
    });

    match result {
        Ok(written) => {
            log::debug!(
                "stored {} objects to {} ({} bytes)",
                scene.objects.len(),
                path.display(),
                written
            );
            Ok(())
        }
        Err(err) => {
            log::warn!("failed to store scene to {}: {}", path.display(), err);
            Err(err)
        }
    }
}

/// Reads and validates a scene file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Scene, CodecError> {
    let path = path.as_ref();
    let result = std::fs::read(path)
        .map_err(CodecError::from)
        .and_then(|bytes| super::decode(&bytes).map(|scene| (scene, bytes.len())));

    match result {
        Ok((scene, len)) => {
            log::debug!(
                "loaded {} objects, {} shared primitives from {} ({} bytes)",
                scene.objects.len(),
                scene.primitives.len(),
                path.display(),
                len
            );
            Ok(scene)
        }
        Err(err) => {
            log::warn!("failed to load scene from {}: {}", path.display(), err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{encode, VERSION};
    use crate::coords::Vec2;
    use crate::geometry::{Circle, Plane};
    use crate::scene::Object;
    use std::path::PathBuf;

    /// Temp file path removed on drop.
    struct TempPath(PathBuf);

    impl TempPath {
        fn new(name: &str) -> Self {
            let file = format!("sdfd-{}-{}.sdfd", std::process::id(), name);
            Self(std::env::temp_dir().join(file))
        }
    }

    impl Drop for TempPath {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn scene() -> Scene {
        let mut scene = Scene::new();
        let shared = scene.push_shared(Plane::from_angle_and_offset(0.5, 2.0));
        let mut object = Object::new();
        let c = object.push_primitive(Circle::new(Vec2::new(1.0, -1.0), 4.0));
        object.intersection(c, shared);
        scene.push_object(object);
        scene
    }

    #[test]
    fn file_round_trip() {
        let path = TempPath::new("round-trip");
        let scene = scene();
        store_to_file(&scene, &path.0).unwrap();
        assert_eq!(std::fs::read(&path.0).unwrap(), encode(&scene).unwrap());
        assert_eq!(load_from_file(&path.0).unwrap(), scene);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = TempPath::new("missing");
        assert!(matches!(load_from_file(&path.0), Err(CodecError::Io(_))));
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let path = std::env::temp_dir().join("sdfd-no-such-dir").join("scene.sdfd");
        assert!(matches!(store_to_file(&scene(), &path), Err(CodecError::Io(_))));
    }

    #[test]
    fn truncated_file_is_rejected() {
        let path = TempPath::new("truncated");
        let bytes = encode(&scene()).unwrap();
        std::fs::write(&path.0, &bytes[..bytes.len() - 1]).unwrap();
        assert!(matches!(load_from_file(&path.0), Err(CodecError::Truncated { .. })));
    }

    #[test]
    fn future_version_file_is_rejected() {
        let path = TempPath::new("future");
        let mut bytes = encode(&scene()).unwrap();
        bytes[4..6].copy_from_slice(&(VERSION + 1).to_le_bytes());
        std::fs::write(&path.0, &bytes).unwrap();
        assert!(matches!(load_from_file(&path.0), Err(CodecError::UnsupportedVersion { .. })));
    }
}
