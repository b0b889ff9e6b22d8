use std::fmt;

use crate::point::Point;

use super::Perm;

/// Writes the images separated by single spaces, without any surrounding structure.
pub fn display_images<Pt: Point>(images: &[Pt], f: &mut impl fmt::Write) -> fmt::Result {
    let mut sep = "";
    for image in images {
        write!(f, "{sep}{image}")?;
        sep = " ";
    }
    Ok(())
}

impl<Pt: Point> fmt::Display for Perm<Pt> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_images(self.images(), f)
    }
}

impl<Pt: Point> fmt::Debug for Perm<Pt> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Perm").field(&self.images()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_debug() {
        let p = Perm::<u8>::from_images([3u8, 0, 2, 1]).unwrap();
        assert_eq!(p.to_string(), "3 0 2 1");
        assert_eq!(format!("{p:?}"), "Perm([3, 0, 2, 1])");

        assert_eq!(Perm::<u32>::identity(0).to_string(), "");
        assert_eq!(Perm::<u32>::identity(1).to_string(), "0");

        let mut out = String::new();
        display_images(&[1u16, 0], &mut out).unwrap();
        assert_eq!(out, "1 0");
    }
}
