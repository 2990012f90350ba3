use sphere_sampling::{Config, Viewer, run_sketch};

const CONFIG_PATH: &str = "sphere_sampling.ron";

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or(
        env_logger::DEFAULT_FILTER_ENV,
        "warn,sphere_sampling=info",
    ));

    let config = Config::load_from_ron_file_or_default_and_log_error(CONFIG_PATH);
    if config.uniform_seed.is_none() {
        log::info!("No uniform seed configured, random samples will differ between runs");
    }

    let mut viewer = Viewer::new();
    run_sketch(&config, &mut viewer)?;
    viewer.run()
}
