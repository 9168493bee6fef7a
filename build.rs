use anyhow::Result;
use mortar_config::{codegen::generate_modules, features::Features, Configuration};
use std::{
    env,
    fs::File,
    io::{BufReader, Read},
    path::PathBuf,
};

const DEFAULT_CONFIG_FILENAME: &str = "./config/host.ron";

fn main() -> Result<()> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let configuration = process_configuration_file()?;
    configuration.validate(&Features::from_env())?;
    generate_modules(&out_dir, &configuration)?;

    if configuration.port.linker_script_constants().is_some() {
        println!("cargo:rustc-link-search={}", out_dir.display());
    }
    Ok(())
}

fn process_configuration_file() -> Result<Configuration> {
    println!("cargo:rerun-if-env-changed=MORTAR_CONFIG");
    println!("cargo:rerun-if-changed={}", DEFAULT_CONFIG_FILENAME);

    let filename = match env::var("MORTAR_CONFIG") {
        Ok(filename) => {
            println!("cargo:rerun-if-changed={}", filename);
            filename
        }
        Err(_) => DEFAULT_CONFIG_FILENAME.into(),
    };

    let file = File::open(filename)?;
    let mut buf_reader = BufReader::new(file);
    let mut contents = String::new();
    buf_reader.read_to_string(&mut contents)?;
    Ok(ron::from_str(&contents)?)
}
