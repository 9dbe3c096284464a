//! Rigid coordinate transforms between FIFF frames

use super::constants::*;
use super::error::{FiffError, Result};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::Cursor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coordinate Transformation
/// Rigid transform between coordinate frames (device, head, MRI, etc.)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordTrans {
    pub from: i32,       // Source coordinate frame
    pub to: i32,         // Destination coordinate frame
    pub rot: [f32; 9],   // 3x3 rotation matrix (row-major)
    pub move_: [f32; 3], // 3D translation vector
}

/// An unset transform: unknown frames, identity geometry
impl Default for CoordTrans {
    fn default() -> Self {
        Self::identity(FIFFV_COORD_UNKNOWN, FIFFV_COORD_UNKNOWN)
    }
}

impl CoordTrans {
    pub fn identity(from: i32, to: i32) -> Self {
        CoordTrans {
            from,
            to,
            rot: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            move_: [0.0; 3],
        }
    }

    /// Parse coordinate transformation from FIFF_COORD_TRANS tag data (56 bytes)
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < COORD_TRANS_STRUCT_SIZE {
            return Err(FiffError::RecordTooShort {
                record: "coordinate transform",
                len: data.len(),
                expected: COORD_TRANS_STRUCT_SIZE,
            });
        }

        let mut cursor = Cursor::new(data);

        let from = cursor.read_i32::<BigEndian>()?;
        let to = cursor.read_i32::<BigEndian>()?;

        let mut rot = [0.0f32; 9];
        cursor.read_f32_into::<BigEndian>(&mut rot)?;

        let mut move_ = [0.0f32; 3];
        cursor.read_f32_into::<BigEndian>(&mut move_)?;

        Ok(CoordTrans {
            from,
            to,
            rot,
            move_,
        })
    }

    /// Encode the forward part of a FIFF_COORD_TRANS record (56 bytes)
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(COORD_TRANS_STRUCT_SIZE);
        bytes.write_i32::<BigEndian>(self.from)?;
        bytes.write_i32::<BigEndian>(self.to)?;
        for value in self.rot.iter().chain(self.move_.iter()) {
            bytes.write_f32::<BigEndian>(*value)?;
        }
        Ok(bytes)
    }

    /// True while both frames are still unknown
    pub fn is_empty(&self) -> bool {
        self.from == FIFFV_COORD_UNKNOWN && self.to == FIFFV_COORD_UNKNOWN
    }

    /// Map a point from the `from` frame into the `to` frame
    pub fn apply(&self, point: [f32; 3]) -> [f32; 3] {
        let r = &self.rot;
        let mut out = [0.0f32; 3];
        for (row, value) in out.iter_mut().enumerate() {
            *value = r[row * 3] * point[0]
                + r[row * 3 + 1] * point[1]
                + r[row * 3 + 2] * point[2]
                + self.move_[row];
        }
        out
    }

    /// Inverse transform (`to` -> `from`); rotation is orthonormal so R^-1 = R^T
    pub fn inverse(&self) -> Self {
        let r = &self.rot;
        let rot = [r[0], r[3], r[6], r[1], r[4], r[7], r[2], r[5], r[8]];
        let t = &self.move_;
        let move_ = [
            -(rot[0] * t[0] + rot[1] * t[1] + rot[2] * t[2]),
            -(rot[3] * t[0] + rot[4] * t[1] + rot[5] * t[2]),
            -(rot[6] * t[0] + rot[7] * t[1] + rot[8] * t[2]),
        ];
        CoordTrans {
            from: self.to,
            to: self.from,
            rot,
            move_,
        }
    }

    /// Get human-readable description of this transformation
    pub fn description(&self) -> String {
        format!(
            "{} -> {}",
            coord_frame_name(self.from),
            coord_frame_name(self.to)
        )
    }

    /// Check if this is a device-to-head transform
    pub fn is_device_to_head(&self) -> bool {
        self.from == FIFFV_COORD_DEVICE && self.to == FIFFV_COORD_HEAD
    }

    /// Check if this is a CTF head to head transform
    pub fn is_ctf_to_head(&self) -> bool {
        self.from == FIFFV_MNE_COORD_CTF_HEAD && self.to == FIFFV_COORD_HEAD
    }
}
