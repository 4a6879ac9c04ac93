//! Renderers for the compose descriptor and the SQL bootstrap scripts.
//!
//! Every renderer is a pure function of the config, so rerunning `setup`
//! with an unchanged config rewrites byte-identical files. Config values
//! are interpolated without quoting or escaping: they are
//! developer-supplied, and the compose/SQL consumers treat them as
//! opaque text. Untrusted input is unsupported here.

use crate::model::PostgresConfig;

pub const COMPOSE_FILE: &str = "docker-compose.yml";
pub const EXTENSIONS_SCRIPT: &str = "01-extensions.sql";
pub const CUSTOM_TYPES_SCRIPT: &str = "02-custom-types.sql";
pub const SAMPLE_DATA_SCRIPT: &str = "03-sample-data.sql";

pub fn render_compose(config: &PostgresConfig) -> String {
    format!(
        r#"version: '3.8'

services:
  postgres:
    image: {image}
    container_name: {container_name}
    environment:
      POSTGRES_USER: {user}
      POSTGRES_PASSWORD: {password}
      POSTGRES_DB: {database}
      # Performance tuning for development
      POSTGRES_INITDB_ARGS: "-E UTF8 --locale=en_US.UTF-8"
    ports:
      - "{port}:5432"
    volumes:
      - postgres_data:/var/lib/postgresql/data
      - ./init-scripts:/docker-entrypoint-initdb.d:ro
    healthcheck:
      test: ["CMD-SHELL", "pg_isready -U {user}"]
      interval: 10s
      timeout: 5s
      retries: 5
    networks:
      - postgres_network

volumes:
  postgres_data:
    driver: local

networks:
  postgres_network:
    driver: bridge
"#,
        image = config.image,
        container_name = config.container_name,
        user = config.user,
        password = config.password,
        database = config.database,
        port = config.port,
    )
}

/// One `CREATE EXTENSION IF NOT EXISTS` per entry, in declaration order,
/// followed by a verification query.
pub fn render_extensions_script(extensions: &[String]) -> String {
    let mut sql = String::from(
        "-- Install PostgreSQL extensions\n\
         -- This script runs automatically when the database is first created\n\n",
    );
    for ext in extensions {
        sql.push_str(&format!("CREATE EXTENSION IF NOT EXISTS {};\n", ext));
    }
    sql.push_str(
        "\n-- Verify extensions\n\
         SELECT extname, extversion FROM pg_extension ORDER BY extname;\n",
    );
    sql
}

/// Fragments verbatim, blank-line separated. `None` when there is
/// nothing to emit; no file is produced in that case.
pub fn render_custom_types_script(custom_types: &[String]) -> Option<String> {
    if custom_types.is_empty() {
        return None;
    }
    let mut sql = String::from(
        "-- Custom data types\n\
         -- Define your custom PostgreSQL types here\n\n",
    );
    for fragment in custom_types {
        sql.push_str(fragment);
        sql.push_str("\n\n");
    }
    Some(sql)
}

pub fn render_sample_script() -> &'static str {
    "-- Sample initialization script\n\
     -- You can add your own tables and seed data here\n\
     \n\
     -- Example: Create a sample table\n\
     -- CREATE TABLE IF NOT EXISTS users (\n\
     --     id SERIAL PRIMARY KEY,\n\
     --     email TEXT NOT NULL UNIQUE,\n\
     --     created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP\n\
     -- );\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_embeds_config_values() {
        let config = PostgresConfig {
            port: 5433,
            container_name: "dev-postgres-foo".to_string(),
            ..PostgresConfig::default()
        };
        let compose = render_compose(&config);
        assert!(compose.contains("image: postgres:16"));
        assert!(compose.contains("container_name: dev-postgres-foo"));
        assert!(compose.contains(r#"- "5433:5432""#));
        assert!(compose.contains("pg_isready -U devuser"));
        assert!(compose.contains("./init-scripts:/docker-entrypoint-initdb.d:ro"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let config = PostgresConfig::default();
        assert_eq!(render_compose(&config), render_compose(&config));
    }

    #[test]
    fn test_extensions_script_preserves_order() {
        let exts = vec!["pg_trgm".to_string(), "btree_gin".to_string()];
        let sql = render_extensions_script(&exts);

        let trgm = sql.find("CREATE EXTENSION IF NOT EXISTS pg_trgm;").unwrap();
        let gin = sql.find("CREATE EXTENSION IF NOT EXISTS btree_gin;").unwrap();
        let verify = sql
            .find("SELECT extname, extversion FROM pg_extension ORDER BY extname;")
            .unwrap();
        assert!(trgm < gin);
        assert!(gin < verify);
    }

    #[test]
    fn test_extensions_script_keeps_duplicates() {
        let exts = vec!["pg_trgm".to_string(), "pg_trgm".to_string()];
        let sql = render_extensions_script(&exts);
        assert_eq!(sql.matches("CREATE EXTENSION IF NOT EXISTS pg_trgm;").count(), 2);
    }

    #[test]
    fn test_custom_types_empty_renders_nothing() {
        assert_eq!(render_custom_types_script(&[]), None);
    }

    #[test]
    fn test_custom_types_verbatim_blank_line_separated() {
        let types = vec![
            "CREATE TYPE mood AS ENUM ('sad', 'ok');".to_string(),
            "CREATE DOMAIN posint AS integer CHECK (VALUE > 0);".to_string(),
        ];
        let sql = render_custom_types_script(&types).unwrap();
        assert!(sql.contains("CREATE TYPE mood AS ENUM ('sad', 'ok');\n\nCREATE DOMAIN"));
    }

    #[test]
    fn test_sample_script_is_static() {
        assert!(render_sample_script().starts_with("-- Sample initialization script"));
    }
}
