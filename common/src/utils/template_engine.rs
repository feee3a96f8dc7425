pub use minijinja::{path_loader, Environment, Value};
pub use minijinja_autoreload::AutoReloader;
pub use minijinja_contrib;
pub use minijinja_embed;
use std::sync::Arc;

/// Name shown in the header and appended to page titles.
pub const SITE_NAME: &str = "ifsclookup.in";

pub trait ProvidesTemplateEngine {
    fn template_engine(&self) -> &Arc<TemplateEngine>;
}

#[derive(Clone)]
pub enum TemplateEngine {
    // Templates are read from disk and reloaded on change in debug builds
    #[cfg(debug_assertions)]
    AutoReload(Arc<AutoReloader>),
    // Templates are compiled into the binary in release builds
    #[cfg(not(debug_assertions))]
    Embedded(Arc<Environment<'static>>),
}

/// Filters, functions and globals shared by every environment we build.
pub fn configure_environment(env: &mut Environment<'_>) {
    minijinja_contrib::add_to_environment(env);
    env.add_global("site_name", SITE_NAME);
}

#[macro_export]
macro_rules! create_template_engine {
    // Relative path to the templates dir, resolved against the calling crate
    ($relative_path:expr) => {{
        #[cfg(debug_assertions)]
        {
            let crate_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
            let template_path = crate_dir.join($relative_path);
            let reloader = $crate::utils::template_engine::AutoReloader::new(move |notifier| {
                let mut env = $crate::utils::template_engine::Environment::new();
                env.set_loader($crate::utils::template_engine::path_loader(&template_path));
                notifier.set_fast_reload(true);
                notifier.watch_path(&template_path, true);
                $crate::utils::template_engine::configure_environment(&mut env);
                Ok(env)
            });
            $crate::utils::template_engine::TemplateEngine::AutoReload(std::sync::Arc::new(
                reloader,
            ))
        }
        #[cfg(not(debug_assertions))]
        {
            let mut env = $crate::utils::template_engine::Environment::new();
            $crate::utils::template_engine::minijinja_embed::load_templates!(&mut env);
            $crate::utils::template_engine::configure_environment(&mut env);
            $crate::utils::template_engine::TemplateEngine::Embedded(std::sync::Arc::new(env))
        }
    }};
}

impl TemplateEngine {
    pub fn render(&self, name: &str, ctx: &Value) -> Result<String, minijinja::Error> {
        match self {
            #[cfg(debug_assertions)]
            Self::AutoReload(reloader) => {
                let env = reloader.acquire_env()?;
                env.get_template(name)?.render(ctx)
            }
            #[cfg(not(debug_assertions))]
            Self::Embedded(env) => env.get_template(name)?.render(ctx),
        }
    }
}
