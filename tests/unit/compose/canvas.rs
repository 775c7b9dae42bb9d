//! Tests for canvas allocation and slot painting

#[cfg(test)]
mod tests {
    use gridstitch::CollageError;
    use gridstitch::compose::render_collage;
    use gridstitch::layout::GridPlan;
    use image::{Rgb, RgbImage};

    // Two columns of 40px cells with a 10px gap fill the 90px width
    // exactly; same for the rows, so no background margin remains
    fn two_by_two_plan() -> GridPlan {
        GridPlan {
            rows: 2,
            cols: 2,
            cell_width: 40,
            cell_height: 30,
            canvas_width: 90,
            canvas_height: 70,
            padding: 10,
        }
    }

    // Tests the background shows only in the padding gaps
    // Verified by painting cells over the gap coordinates
    #[test]
    fn test_background_fills_gaps() {
        let plan = two_by_two_plan();
        let slots = vec![RgbImage::from_pixel(8, 8, Rgb([0, 0, 0])); 4];
        let canvas = render_collage(&plan, &slots).unwrap();

        assert_eq!(canvas.dimensions(), (90, 70));
        // Vertical gap between the columns, horizontal gap between the rows
        assert_eq!(*canvas.get_pixel(45, 0), Rgb([240, 240, 240]));
        assert_eq!(*canvas.get_pixel(0, 35), Rgb([240, 240, 240]));
        // Inside the first cell
        assert_eq!(*canvas.get_pixel(5, 5), Rgb([0, 0, 0]));
    }

    // Tests each slot lands at its reading-order origin
    // Verified by transposing rows and columns during painting
    #[test]
    fn test_slots_painted_in_reading_order() {
        let plan = two_by_two_plan();
        let colors = [[250, 0, 0], [0, 250, 0], [0, 0, 250], [250, 250, 0]];
        let slots: Vec<RgbImage> = colors
            .iter()
            .map(|color| RgbImage::from_pixel(4, 4, Rgb(*color)))
            .collect();

        let canvas = render_collage(&plan, &slots).unwrap();

        assert_color_near(*canvas.get_pixel(20, 15), colors[0]);
        assert_color_near(*canvas.get_pixel(70, 15), colors[1]);
        assert_color_near(*canvas.get_pixel(20, 55), colors[2]);
        assert_color_near(*canvas.get_pixel(70, 55), colors[3]);
    }

    // Tests sources stretch to the exact cell size regardless of shape
    // Verified by resizing with preserved aspect ratio
    #[test]
    fn test_sources_stretch_to_cell() {
        let plan = two_by_two_plan();
        let slots = vec![RgbImage::from_pixel(2, 20, Rgb([60, 60, 60])); 4];
        let canvas = render_collage(&plan, &slots).unwrap();

        // Tall 2x20 sources still cover the whole 40x30 cell
        assert_color_near(*canvas.get_pixel(0, 0), [60, 60, 60]);
        assert_color_near(*canvas.get_pixel(39, 29), [60, 60, 60]);
    }

    // Tests the slot count contract
    // Verified by dropping the length check before painting
    #[test]
    fn test_slot_mismatch_rejected() {
        let plan = two_by_two_plan();
        let slots = vec![RgbImage::from_pixel(4, 4, Rgb([0, 0, 0])); 3];

        let error = render_collage(&plan, &slots).unwrap_err();
        assert!(matches!(
            error,
            CollageError::SlotMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    // Tests the floor-rounding margin keeps its background pixels
    // Verified by widening cells to cover the full canvas
    #[test]
    fn test_unpainted_margin_stays_background() {
        // 3 columns of 33px span 99px, leaving a 1px margin at x = 99
        let plan = GridPlan {
            rows: 1,
            cols: 3,
            cell_width: 33,
            cell_height: 75,
            canvas_width: 100,
            canvas_height: 75,
            padding: 0,
        };
        let slots = vec![RgbImage::from_pixel(8, 8, Rgb([0, 0, 0])); 3];
        let canvas = render_collage(&plan, &slots).unwrap();

        assert_eq!(*canvas.get_pixel(99, 0), Rgb([240, 240, 240]));
        assert_eq!(*canvas.get_pixel(99, 74), Rgb([240, 240, 240]));
        assert_eq!(*canvas.get_pixel(98, 74), Rgb([0, 0, 0]));
    }

    // Lanczos resampling of a solid color may shift a channel by one
    fn assert_color_near(actual: Rgb<u8>, expected: [u8; 3]) {
        for (channel, target) in actual.0.iter().zip(expected.iter()) {
            let diff = (i16::from(*channel) - i16::from(*target)).abs();
            assert!(diff <= 1, "channel off by {diff}: {actual:?} vs {expected:?}");
        }
    }
}
