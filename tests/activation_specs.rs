extern crate turgor;
extern crate collenchyma as co;

#[cfg(all(test, feature = "native"))]
mod activation_spec {
    use std::rc::Rc;
    use co::prelude::*;
    use turgor::activation::*;
    use turgor::array::Array;
    use turgor::util::{native_scalar, write_to_memory};

    fn backend() -> Rc<Backend<Native>> {
        Rc::new(Backend::<Native>::default().unwrap())
    }

    fn array_from(backend: &Rc<Backend<Native>>, values: &[f32]) -> Array<Backend<Native>> {
        let mut array = Array::new(backend.clone(), &[values.len()]).unwrap();
        write_to_memory(array.data_mut().get_mut(backend.device()).unwrap(), values);
        array
    }

    fn array_values(array: &Array<Backend<Native>>) -> Vec<f32> {
        array.data()
            .get(array.backend().device()).unwrap()
            .as_native().unwrap()
            .as_slice::<f32>().to_vec()
    }

    fn assert_close(expected: &[f32], actual: &[f32]) {
        assert_eq!(expected.len(), actual.len());
        for (&e, &a) in expected.iter().zip(actual.iter()) {
            assert!((e - a).abs() < 1e-5,
                    "expected {} but got {} (in {:?} vs {:?})", e, a, expected, actual);
        }
    }

    #[test]
    fn logit_maps_the_open_unit_interval() {
        let backend = backend();
        let mut x = array_from(&backend, &[1.0, 0.0, 0.9]);
        let result = array_values(&x.logit(&LogitConfig::default(), None).unwrap());

        assert!(result[0].is_infinite() && result[0] > 0.0);
        assert!(result[1].is_infinite() && result[1] < 0.0);
        assert!((result[2] - 2.1972246).abs() < 1e-5);
    }

    #[test]
    fn logit_yields_nan_outside_the_domain() {
        let backend = backend();
        let mut x = array_from(&backend, &[1.5, -0.5]);
        let result = array_values(&x.logit(&LogitConfig::default(), None).unwrap());

        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
    }

    #[test]
    fn logit_clamps_with_eps() {
        let backend = backend();
        let mut x = array_from(&backend, &[1.0, 2.0, -0.9]);
        let config = LogitConfig { eps: Some(0.2), ..LogitConfig::default() };
        let result = x.logit(&config, None).unwrap();

        assert_close(&[1.3862944, 1.3862944, -1.3862944], &array_values(&result));
    }

    #[test]
    fn thresholded_relu_cuts_below_the_threshold() {
        let backend = backend();
        let mut x = array_from(&backend, &[-1.0, 0.2, 1.0]);
        let config = ThresholdedReluConfig { threshold: 0.5 };
        let result = x.thresholded_relu(&config, None).unwrap();

        assert_close(&[0.0, 0.0, 1.0], &array_values(&result));
    }

    #[test]
    fn thresholded_relu_defaults_to_plain_relu() {
        let backend = backend();
        let mut x = array_from(&backend, &[-1.0, 0.2, 1.0]);
        let result = x.thresholded_relu(&ThresholdedReluConfig::default(), None).unwrap();

        assert_close(&[0.0, 0.2, 1.0], &array_values(&result));
    }

    #[test]
    fn prelu_applies_a_scalar_slope_everywhere() {
        let backend = backend();
        let mut x = array_from(&backend, &[-2.0, 0.0, 2.0]);
        let mut slope = native_scalar(0.25f32);
        let result = x.prelu(&mut slope, None).unwrap();

        assert_close(&[-0.5, 0.0, 2.0], &array_values(&result));
    }

    #[test]
    fn prelu_tiles_the_slope_over_the_input() {
        let backend = backend();
        let mut x = array_from(&backend, &[-4.0, -2.0, 2.0, 4.0]);
        let mut slope = array_from(&backend, &[0.5, 0.25]);
        let result = x.prelu(slope.data_mut(), None).unwrap();

        assert_close(&[-2.0, -0.5, 2.0, 4.0], &array_values(&result));
    }

    #[test]
    fn prelu_rejects_a_slope_that_does_not_tile() {
        let backend = backend();
        let mut x = array_from(&backend, &[-1.0, 0.0, 1.0]);
        let mut slope = array_from(&backend, &[0.5, 0.25]);

        assert!(x.prelu(slope.data_mut(), None).is_err());
    }

    #[test]
    fn relu6_clips_to_the_upper_bound() {
        let backend = backend();
        let mut x = array_from(&backend, &[-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let result = x.relu6(&Relu6Config::default(), None).unwrap();

        assert_close(&[0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 6.0],
                     &array_values(&result));
    }

    #[test]
    fn logsigmoid_matches_reference_values() {
        let backend = backend();
        let mut x = array_from(&backend, &[-1.0, 2.0, 4.0, -10.0]);
        let result = x.logsigmoid(&LogSigmoidConfig::default()).unwrap();

        assert_close(&[-1.3132617, -0.126928, -0.01814993, -10.000046],
                     &array_values(&result));
    }

    #[test]
    fn logsigmoid_is_stable_for_large_negative_input() {
        let backend = backend();
        let mut x = array_from(&backend, &[-100.0]);
        let result = x.logsigmoid(&LogSigmoidConfig::default()).unwrap();

        assert_close(&[-100.0], &array_values(&result));
    }

    #[test]
    fn selu_matches_reference_values() {
        let backend = backend();
        let mut x = array_from(&backend, &[-1.0, 0.0, 1.0, 2.0, 3.0]);
        let result = x.selu(None).unwrap();

        assert_close(&[-1.1113307, 0.0, 1.050701, 2.101402, 3.152103],
                     &array_values(&result));
    }

    #[test]
    fn silu_matches_reference_values() {
        let backend = backend();
        let mut x = array_from(&backend, &[-1.0, 0.0, 1.0]);
        let result = x.silu(None).unwrap();

        assert_close(&[-0.26894143, 0.0, 0.73105854], &array_values(&result));
    }

    #[test]
    fn elu_matches_reference_values() {
        let backend = backend();
        let mut x = array_from(&backend, &[0.39, -0.85]);
        let result = x.elu(&EluConfig::default(), None).unwrap();

        assert_close(&[0.39, -0.5725851], &array_values(&result));
    }

    #[test]
    fn elu_scales_the_negative_branch_with_alpha() {
        let backend = backend();
        let mut x = array_from(&backend, &[-1.0, 1.0]);
        let result = x.elu(&EluConfig { alpha: 0.1 }, None).unwrap();

        assert_close(&[-0.063212056, 1.0], &array_values(&result));
    }

    #[test]
    fn hardtanh_clamps_to_the_default_linear_region() {
        let backend = backend();
        let mut x = array_from(&backend, &[-2.0, 0.2, 2.0]);
        let result = x.hardtanh(&HardtanhConfig::default(), None).unwrap();

        assert_close(&[-1.0, 0.2, 1.0], &array_values(&result));
    }

    #[test]
    fn hardtanh_honors_custom_bounds() {
        let backend = backend();
        let mut x = array_from(&backend, &[-3.0, 0.5, 3.0]);
        let config = HardtanhConfig { min_val: -2.0, max_val: 2.0 };
        let result = x.hardtanh(&config, None).unwrap();

        assert_close(&[-2.0, 0.5, 2.0], &array_values(&result));
    }

    #[test]
    fn tanhshrink_matches_reference_values() {
        let backend = backend();
        let mut x = array_from(&backend, &[-1.0, 0.0, 1.0]);
        let result = x.tanhshrink(None).unwrap();

        assert_close(&[-0.23840582, 0.0, 0.23840582], &array_values(&result));
    }

    #[test]
    fn celu_equals_elu_at_the_default_alpha() {
        let backend = backend();
        let mut x = array_from(&backend, &[0.39, -0.85]);
        let result = x.celu(&CeluConfig::default(), None).unwrap();

        assert_close(&[0.39, -0.5725851], &array_values(&result));
    }

    #[test]
    fn celu_scales_the_exponential_branch_with_alpha() {
        let backend = backend();
        let mut x = array_from(&backend, &[-2.0, 1.0]);
        let config = CeluConfig { alpha: 2.0, ..CeluConfig::default() };
        let result = x.celu(&config, None).unwrap();

        assert_close(&[-1.2642411, 1.0], &array_values(&result));
    }

    #[test]
    fn a_supplied_output_buffer_receives_the_result() {
        let backend = backend();
        let mut x = array_from(&backend, &[-1.0, 0.0, 1.0]);
        let out = array_from(&backend, &[0.0, 0.0, 0.0]);
        let result = x.selu(Some(out)).unwrap();

        assert_close(&[-1.1113307, 0.0, 1.050701], &array_values(&result));
    }
}
