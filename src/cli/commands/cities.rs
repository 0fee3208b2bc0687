use crate::config::Config;
use crate::errors::AppResult;
use crate::models::City;
use crate::utils::table::{Column, Table};

/// Handle the `cities` command: one row per supported city
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut table = Table::new(vec![
        Column::left("City"),
        Column::left("File"),
        Column::left("Status"),
    ]);

    for city in City::ALL {
        let (file, status) = match cfg.city_file(city) {
            Ok(p) => {
                let status = if p.is_file() { "ok" } else { "missing" };
                (p.display().to_string(), status)
            }
            Err(_) => ("--".to_string(), "not configured"),
        };
        table.add_row(vec![city.title().to_string(), file, status.to_string()]);
    }

    print!("{}", table.render());
    Ok(())
}
