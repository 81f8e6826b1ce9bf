use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use rpm_core::Resource;
use rpm_core::config::RpmConfig;

pub fn run(config: &RpmConfig, data_dir: &Path) -> Result<()> {
    let config_path = RpmConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", data_dir.display());
    for resource in Resource::ALL {
        println!(
            "    {:<16} {}",
            resource.slug(),
            data_dir.join(resource.file_name()).display()
        );
    }

    println!("{}", "Server".bold());
    println!("  Listen:  http://{}", config.bind_addr());

    Ok(())
}
