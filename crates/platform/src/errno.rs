//! Kernel-style error numbers.
//!
//! Every collaborator in the card framework reports failure as an errno.
//! [`Errno`] stores the positive number; [`Errno::to_kernel`] gives the
//! negative status the C-facing entry points return.

/// A non-zero errno value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Errno(u16);

impl Errno {
    /// Operation not permitted.
    pub const EPERM: Self = Self(1);
    /// No such file or directory (missing widget/pin lookups).
    pub const ENOENT: Self = Self(2);
    /// I/O error.
    pub const EIO: Self = Self(5);
    /// Out of memory.
    pub const ENOMEM: Self = Self(12);
    /// Device or resource busy.
    pub const EBUSY: Self = Self(16);
    /// No such device.
    pub const ENODEV: Self = Self(19);
    /// Invalid argument.
    pub const EINVAL: Self = Self(22);
    /// Operation not supported.
    pub const EOPNOTSUPP: Self = Self(95);
    /// Driver requests probe retry.
    pub const EPROBE_DEFER: Self = Self(517);

    /// Wrap a positive errno number. Returns `None` for zero.
    pub const fn new(errno: u16) -> Option<Self> {
        if errno == 0 {
            None
        } else {
            Some(Self(errno))
        }
    }

    /// The negative status form, e.g. `-22` for [`Errno::EINVAL`].
    pub fn to_kernel(self) -> i32 {
        i32::from(self.0).wrapping_neg()
    }

    /// Symbolic name for the well-known values, used as a log field.
    pub const fn name(self) -> &'static str {
        match self.0 {
            1 => "EPERM",
            2 => "ENOENT",
            5 => "EIO",
            12 => "ENOMEM",
            16 => "EBUSY",
            19 => "ENODEV",
            22 => "EINVAL",
            95 => "EOPNOTSUPP",
            517 => "EPROBE_DEFER",
            _ => "EUNKNOWN",
        }
    }
}

impl core::fmt::Display for Errno {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_kernel())
    }
}

impl core::error::Error for Errno {}
