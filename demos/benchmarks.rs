#[macro_use]
extern crate timeit;
extern crate env_logger;
extern crate rand;
extern crate collenchyma as co;
extern crate turgor;

#[cfg(feature = "native")]
fn main() {
    env_logger::init().unwrap();
    native::run();
}

#[cfg(not(feature = "native"))]
fn main() {
    println!("The benchmarks demo requires the 'native' feature.");
}

#[cfg(feature = "native")]
mod native {
    use co::prelude::*;
    use rand::Rng;

    use std::env;
    use std::rc::Rc;
    use turgor::activation::*;
    use turgor::array::Array;
    use turgor::util::write_to_memory;

    const SIZES: [usize; 3] = [1_024, 65_536, 1_048_576];

    pub fn run() {
        let activations: Vec<String> = vec!("elu".to_string(), "silu".to_string(), "selu".to_string(), "hardtanh".to_string(), "logsigmoid".to_string());
        if let Some(activation) = env::args().nth(1) {
            if activations.contains(&activation) {
                println!("Executing activation: {:?}", activation);
                bench_activation(&activation);
            } else {
                println!("Sorry, no activation found with name '{:?}'. Valid options: {:?}", activation, activations);
            }
        } else {
            println!("No `activation` argument specified. Default: `elu`. Valid options: {:?}", activations);
            bench_activation("elu");
        }
    }

    fn native_backend() -> Rc<Backend<Native>> {
        let framework = Native::new();
        let hardwares = &framework.hardwares().to_vec();
        let backend_config = BackendConfig::new(framework, hardwares);
        Rc::new(Backend::new(backend_config).unwrap())
    }

    fn random_array(backend: &Rc<Backend<Native>>, size: usize) -> Array<Backend<Native>> {
        let mut rng = ::rand::thread_rng();
        let values = (0..size).map(|_| rng.gen_range(-4f32, 4f32)).collect::<Vec<f32>>();
        let mut array = Array::new(backend.clone(), &[size]).unwrap();
        write_to_memory(array.data_mut().get_mut(backend.device()).unwrap(), &values);
        array
    }

    #[inline(never)]
    fn bench_profile<F: FnMut() -> ()>(name: &str, mut bench_func: F, times: usize) {
        println!("Running benchmark {}", name);
        println!("----------");
        for _ in 0..10 {
            bench_func();
        }
        let average_time = timeit_loops!(times, {
            bench_func();
        });
        println!("----------");
        println!("Average time {:.5} ms", average_time * 1_000.0);
        println!("");
    }

    fn bench_activation(name: &str) {
        let backend = native_backend();
        for size in SIZES.iter() {
            let mut input = random_array(&backend, *size);
            let mut output = Some(Array::new(backend.clone(), &[*size]).unwrap());

            bench_profile(&format!("{}_{}", name, size), || {
                let result = match name {
                    "elu" => input.elu(&EluConfig::default(), output.take()),
                    "silu" => input.silu(output.take()),
                    "selu" => input.selu(output.take()),
                    "hardtanh" => input.hardtanh(&HardtanhConfig::default(), output.take()),
                    "logsigmoid" => input.logsigmoid(&LogSigmoidConfig::default()),
                    _ => unreachable!(),
                };
                output = Some(result.unwrap());
            }, 10);
        }
    }
}
