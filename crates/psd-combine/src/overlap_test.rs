mod tests {
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    use psd::{Provenance, SizeBin};

    use crate::error::CombineError;
    use crate::overlap::merge_overlap;

    fn bin(lower: f64, upper: f64, count: f64, provenance: Provenance) -> SizeBin {
        let center = (lower * upper).sqrt();
        SizeBin {
            center,
            lower,
            upper,
            count,
            density: count / (upper.log10() - lower.log10()),
            provenance,
        }
    }

    fn sorted(mut bins: Vec<SizeBin>) -> Vec<SizeBin> {
        bins.sort_by(|a, b| a.center.total_cmp(&b.center));
        bins
    }

    #[test]
    fn left_edge_fine_bin_extends_the_first_target() {
        let mut bins = sorted(vec![
            bin(80.0, 150.0, 30.0, Provenance::InstrumentA),
            bin(100.0, 200.0, 50.0, Provenance::InstrumentB),
            bin(200.0, 400.0, 80.0, Provenance::InstrumentB),
        ]);

        let folded = merge_overlap(&mut bins).unwrap();
        assert_eq!(folded, 1);
        assert_eq!(bins.len(), 2);

        let merged = bins[0];
        assert_eq!(merged.provenance, Provenance::Merged);
        assert_relative_eq!(merged.lower, 80.0);
        assert_relative_eq!(merged.upper, 200.0);
        assert_relative_eq!(merged.center, 140.0);

        // fine-only 20 of 70, target-only 50 of 100, shared 50 split evenly:
        // 30*(20/70) + 50*(50/100) + 0.5*(30*50/70 + 50*50/100)
        assert_relative_eq!(merged.count, 56.785714285714285, max_relative = 1e-12);

        // The second coarse bin is untouched
        assert_eq!(bins[1].provenance, Provenance::InstrumentB);
        assert_relative_eq!(bins[1].count, 80.0);
    }

    #[test]
    fn contained_fine_bin_averages_the_shared_width() {
        let mut bins = sorted(vec![
            bin(80.0, 120.0, 40.0, Provenance::InstrumentA),
            bin(50.0, 150.0, 100.0, Provenance::InstrumentB),
        ]);

        merge_overlap(&mut bins).unwrap();
        assert_eq!(bins.len(), 1);

        let merged = bins[0];
        assert_eq!(merged.provenance, Provenance::Merged);
        // Boundaries unchanged
        assert_relative_eq!(merged.lower, 50.0);
        assert_relative_eq!(merged.upper, 150.0);
        // 100*(100-40)/100 + (100*(40/100) + 40)/2 = 60 + 40
        assert_relative_eq!(merged.count, 100.0, max_relative = 1e-12);
    }

    #[test]
    fn straddling_fine_bin_splits_between_both_targets() {
        let mut bins = sorted(vec![
            bin(180.0, 220.0, 40.0, Provenance::InstrumentA),
            bin(100.0, 200.0, 60.0, Provenance::InstrumentB),
            bin(200.0, 300.0, 90.0, Provenance::InstrumentB),
        ]);

        merge_overlap(&mut bins).unwrap();
        assert_eq!(bins.len(), 2);

        // t1: 60*(80/100) + (60*(20/100) + 40*(20/40))/2 = 48 + 16
        assert_relative_eq!(bins[0].count, 64.0, max_relative = 1e-12);
        // t2: 90*(80/100) + (90*(20/100) + 40*(20/40))/2 = 72 + 19
        assert_relative_eq!(bins[1].count, 91.0, max_relative = 1e-12);

        for merged in &bins {
            assert_eq!(merged.provenance, Provenance::Merged);
        }
        // Straddle leaves boundaries alone
        assert_relative_eq!(bins[0].lower, 100.0);
        assert_relative_eq!(bins[0].upper, 200.0);
        assert_relative_eq!(bins[1].lower, 200.0);
        assert_relative_eq!(bins[1].upper, 300.0);
    }

    #[test]
    fn fine_bin_spanning_three_targets_is_rejected() {
        let mut bins = sorted(vec![
            bin(105.0, 245.0, 40.0, Provenance::InstrumentA),
            bin(100.0, 150.0, 10.0, Provenance::InstrumentB),
            bin(150.0, 200.0, 10.0, Provenance::InstrumentB),
            bin(200.0, 250.0, 10.0, Provenance::InstrumentB),
        ]);

        let err = merge_overlap(&mut bins).unwrap_err();
        assert_eq!(
            err,
            CombineError::UnsupportedOverlapShape {
                fine_lower: 105.0,
                fine_upper: 245.0,
                targets: 3,
            }
        );
    }

    #[test]
    fn left_edge_bin_reaching_two_targets_is_rejected() {
        let mut bins = sorted(vec![
            bin(90.0, 260.0, 40.0, Provenance::InstrumentA),
            bin(100.0, 200.0, 10.0, Provenance::InstrumentB),
            bin(200.0, 300.0, 10.0, Provenance::InstrumentB),
        ]);

        let err = merge_overlap(&mut bins).unwrap_err();
        assert!(matches!(
            err,
            CombineError::UnsupportedOverlapShape { targets: 2, .. }
        ));
    }

    #[test]
    fn no_op_without_both_instruments() {
        let mut bins = vec![bin(80.0, 120.0, 40.0, Provenance::InstrumentA)];
        assert_eq!(merge_overlap(&mut bins).unwrap(), 0);
        assert_eq!(bins.len(), 1);
    }

    #[test]
    fn consistent_densities_are_conserved_over_the_merged_span() {
        // Both instruments sampling the same uniform linear density must
        // merge into exactly that density's total over the union span.
        let mut rng = ChaChaRng::seed_from_u64(7);

        for _ in 0..20 {
            let density: f64 = rng.random_range(0.5..5.0);
            let fine_width: f64 = rng.random_range(40.0..60.0);
            let fine_start: f64 = rng.random_range(60.0..95.0);

            let mut bins = Vec::new();
            for i in 0..3 {
                let lower = 100.0 + 100.0 * i as f64;
                bins.push(bin(
                    lower,
                    lower + 100.0,
                    density * 100.0,
                    Provenance::InstrumentB,
                ));
            }
            let mut lower = fine_start;
            while lower + fine_width < 395.0 {
                bins.push(bin(
                    lower,
                    lower + fine_width,
                    density * fine_width,
                    Provenance::InstrumentA,
                ));
                lower += fine_width;
            }
            let mut bins = sorted(bins);

            merge_overlap(&mut bins).unwrap();

            // Union span is [fine_start, 400]; at uniform density the
            // merged total must equal the density times that span
            let total: f64 = bins.iter().map(|b| b.count).sum();
            assert_relative_eq!(
                total,
                density * (400.0 - fine_start),
                max_relative = 1e-9
            );
        }
    }
}
