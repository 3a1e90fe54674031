//! Integer derivative kernels for the gradient operators.

/// A borrowed 2D kernel of integer coefficients, stored in row-major order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Kernel<'a> {
    data: &'a [i32],
    width: u32,
    height: u32,
}

impl<'a> Kernel<'a> {
    /// Construct a kernel from a row-major slice and its dimensions.
    ///
    /// # Panics
    /// 1. If `width == 0 || height == 0`.
    /// 2. If `width * height != data.len() as u32`.
    pub const fn new(data: &'a [i32], width: u32, height: u32) -> Kernel<'a> {
        assert!(width > 0 && height > 0, "width and height must be non-zero");
        assert!(width * height == data.len() as u32);
        Kernel {
            data,
            width,
            height,
        }
    }

    /// Coefficient at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is outside of the kernel.
    #[inline]
    pub fn at(&self, x: u32, y: u32) -> i32 {
        self.data[(y * self.width + x) as usize]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Horizontal and vertical derivative kernels of one operator family.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KernelPair<'a> {
    pub horizontal: Kernel<'a>,
    pub vertical: Kernel<'a>,
}

/// Sobel horizontal 3x3 kernel.
pub const SOBEL_HORIZONTAL_3X3: Kernel<'static> =
    Kernel::new(&[-1, 0, 1, -2, 0, 2, -1, 0, 1], 3, 3);
/// Sobel vertical 3x3 kernel, the horizontal one transposed and flipped on both axes.
pub const SOBEL_VERTICAL_3X3: Kernel<'static> =
    Kernel::new(&[1, 2, 1, 0, 0, 0, -1, -2, -1], 3, 3);

/// Prewitt horizontal 3x3 kernel.
pub const PREWITT_HORIZONTAL_3X3: Kernel<'static> =
    Kernel::new(&[-1, -1, -1, 0, 0, 0, 1, 1, 1], 3, 3);
/// Prewitt vertical 3x3 kernel.
pub const PREWITT_VERTICAL_3X3: Kernel<'static> =
    Kernel::new(&[-1, 0, 1, -1, 0, 1, -1, 0, 1], 3, 3);

/// Roberts cross horizontal 2x2 kernel.
pub const ROBERTS_HORIZONTAL_2X2: Kernel<'static> = Kernel::new(&[1, 0, 0, -1], 2, 2);
/// Roberts cross vertical 2x2 kernel.
pub const ROBERTS_VERTICAL_2X2: Kernel<'static> = Kernel::new(&[0, 1, -1, 0], 2, 2);
