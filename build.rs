use std::env;
fn main() {
    dotenvy::dotenv().ok();
    println!("cargo:rerun-if-env-changed=DATABASE_URL");
    println!("cargo:rerun-if-env-changed=DB_SCHEMA");

    if env::var("DATABASE_URL").is_err() {
        println!("cargo:warning=Required environment variable DATABASE_URL is not set.");
    }
    match env::var("DB_SCHEMA") {
        Ok(schema) => println!("cargo:warning=Using database schema {schema}"),
        Err(_) => println!("cargo:warning=DB_SCHEMA is not set, tables go to the dev schema."),
    }
}
