use std::{env, error::Error, fs::File, io::BufReader, path::Path};

use nutriplan_model::ProfileRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let mut args = env::args().skip(1);
    let profile_path = args.next().unwrap_or_else(|| "profile.json".to_owned());
    let url = args
        .next()
        .unwrap_or_else(|| "http://localhost:8080/".to_owned());

    let file = File::open(&profile_path)?;
    let profile: ProfileRequest = serde_json::from_reader(BufReader::new(file))?;
    let client = nutriplan_client::create(url);
    nutriplan_client::fetch_plan(&client, &profile, Path::new(".")).await?;

    Ok(())
}
