mod tests {
    use approx::assert_relative_eq;

    use crate::binning::bin_boundaries;
    use crate::density::{
        count_from_density, densities_from_boundaries, densities_from_resolution,
        density_from_boundaries, density_from_resolution,
    };

    #[test]
    fn resolution_form_multiplies_by_resolution() {
        // log width at 32 bins/decade is 1/32, so density = count * 32
        assert_relative_eq!(density_from_resolution(4.0, 32.0), 128.0);
    }

    #[test]
    fn resolution_and_boundary_forms_agree() {
        // Boundaries derived from the same resolution give the same density
        let resolution = 16.0;
        let count = 250.0;
        let (lower, upper) = bin_boundaries(0.7, resolution);
        assert_relative_eq!(
            density_from_boundaries(count, lower, upper),
            density_from_resolution(count, resolution),
            max_relative = 1e-12
        );
    }

    #[test]
    fn count_roundtrips_through_density() {
        let (lower, upper) = (0.5, 0.9);
        let count = 123.456;
        let density = density_from_boundaries(count, lower, upper);
        assert_relative_eq!(
            count_from_density(density, lower, upper),
            count,
            max_relative = 1e-12
        );
    }

    #[test]
    fn column_forms_match_scalar_forms() {
        let counts = [1.0, 10.0, 100.0];
        let lowers = [0.1, 0.2, 0.4];
        let uppers = [0.2, 0.4, 0.8];

        let by_resolution = densities_from_resolution(&counts, 64.0);
        let by_bounds = densities_from_boundaries(&counts, &lowers, &uppers);
        for i in 0..counts.len() {
            assert_relative_eq!(by_resolution[i], density_from_resolution(counts[i], 64.0));
            assert_relative_eq!(
                by_bounds[i],
                density_from_boundaries(counts[i], lowers[i], uppers[i])
            );
        }
    }
}
