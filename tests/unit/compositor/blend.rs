//! Tests for blend operators and layer roles

#[cfg(test)]
mod tests {
    use crate::compositor::blend::{BlendOp, LayerRole};
    use image::{Rgb, RgbImage};

    // Tests minimum keeps the darker channel independently
    #[test]
    fn test_minimum_per_channel() {
        let mut destination = RgbImage::from_pixel(2, 1, Rgb([200, 50, 120]));
        let source = RgbImage::from_pixel(2, 1, Rgb([100, 90, 120]));

        BlendOp::Minimum.apply(&mut destination, &source).unwrap();

        assert_eq!(destination.get_pixel(1, 0), &Rgb([100, 50, 120]));
    }

    // Tests addition saturates at white
    #[test]
    fn test_add_saturates() {
        let mut destination = RgbImage::from_pixel(1, 1, Rgb([200, 10, 0]));
        let source = RgbImage::from_pixel(1, 1, Rgb([100, 20, 0]));

        BlendOp::Add.apply(&mut destination, &source).unwrap();

        assert_eq!(destination.get_pixel(0, 0), &Rgb([255, 30, 0]));
    }

    // Tests identity colours leave any destination unchanged
    #[test]
    fn test_identity_colours() {
        for op in [BlendOp::Minimum, BlendOp::Add] {
            let Rgb(identity) = op.identity();
            for value in [0u8, 1, 128, 254, 255] {
                assert_eq!(op.channel(value, identity[0]), value);
            }
        }
    }

    // Tests size mismatches are rejected without touching the destination
    #[test]
    fn test_size_mismatch() {
        let mut destination = RgbImage::from_pixel(2, 2, Rgb([255; 3]));
        let source = RgbImage::from_pixel(3, 2, Rgb([0; 3]));

        assert!(BlendOp::Minimum.apply(&mut destination, &source).is_err());
        assert_eq!(destination.get_pixel(0, 0), &Rgb([255; 3]));
    }

    // Tests only the MASK marker blends additively
    #[test]
    fn test_roles_select_operators() {
        assert_eq!(LayerRole::of('#'), LayerRole::StatusAdditive);
        assert_eq!(LayerRole::of('@'), LayerRole::Background);
        assert_eq!(LayerRole::of('$'), LayerRole::StatusMinimum);
        assert_eq!(LayerRole::of('&'), LayerRole::StatusMinimum);
        assert_eq!(LayerRole::of('C'), LayerRole::Trait);

        assert_eq!(LayerRole::of('#').blend_op(), BlendOp::Add);
        for symbol in ['@', '$', '&', 'A'] {
            assert_eq!(LayerRole::of(symbol).blend_op(), BlendOp::Minimum);
        }
    }
}
