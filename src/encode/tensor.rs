use std::io::Write;
use std::path::{Path, PathBuf};

use crate::encode::sink::{BatchSink, SinkConfig};
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::output::create_file;
use crate::schedule::scheduler::BatchOutput;

const NPY_MAGIC: &[u8] = b"\x93NUMPY";
const NPY_ALIGN: usize = 64;

/// NumPy `.npy` v1.0 header for a C-ordered `u8` array of `shape`.
pub fn npy_header(shape: &[usize]) -> Vec<u8> {
    let dims = match shape {
        [single] => format!("({single},)"),
        _ => format!(
            "({})",
            shape
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    };
    let mut dict = format!("{{'descr': '|u1', 'fortran_order': False, 'shape': {dims}, }}");
    // magic + version + u16 length + dict + '\n' must be a multiple of NPY_ALIGN.
    let unpadded = NPY_MAGIC.len() + 2 + 2 + dict.len() + 1;
    let pad = (NPY_ALIGN - unpadded % NPY_ALIGN) % NPY_ALIGN;
    dict.extend(std::iter::repeat_n(' ', pad));
    dict.push('\n');

    let mut out = Vec::with_capacity(NPY_MAGIC.len() + 4 + dict.len());
    out.extend_from_slice(NPY_MAGIC);
    out.extend_from_slice(&[1, 0]);
    out.extend_from_slice(&(dict.len() as u16).to_le_bytes());
    out.extend_from_slice(dict.as_bytes());
    out
}

/// Write `data` as a `u8` tensor of `shape` to `path`.
pub fn save_tensor(path: &Path, shape: &[usize], data: &[u8]) -> SpriteResult<()> {
    let expected: usize = shape.iter().product();
    if expected != data.len() {
        return Err(SpriteError::serde(format!(
            "tensor of shape {shape:?} needs {expected} bytes, got {}",
            data.len()
        )));
    }
    let mut writer = create_file(path)?;
    writer
        .write_all(&npy_header(shape))
        .and_then(|()| writer.write_all(data))
        .and_then(|()| writer.flush())
        .map_err(|e| SpriteError::io(path, e))
}

/// Persists every batch as `{split}_{index}.npy`, shaped `N x T x 3 x H x W`.
#[derive(Debug)]
pub struct TensorSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl TensorSink {
    /// Sink writing into `dir`, which must exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Files written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl BatchSink for TensorSink {
    fn begin(&mut self, _cfg: &SinkConfig) -> SpriteResult<()> {
        self.written.clear();
        Ok(())
    }

    fn push_batch(&mut self, out: &BatchOutput) -> SpriteResult<()> {
        let batch = &out.batch;
        let path = self
            .dir
            .join(format!("{}_{}.npy", batch.split.as_str(), batch.index));
        save_tensor(&path, &batch.tensor_shape(), &batch.to_tensor_bytes())?;
        tracing::debug!(path = %path.display(), "wrote tensor");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> SpriteResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/tensor.rs"]
mod tests;
