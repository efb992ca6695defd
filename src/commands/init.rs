//! The `init` command: render the metadata module and patch the layout.

use crate::cli::InitArgs;
use crate::context::{MODULE_BASENAME, ProjectContext};
use crate::dialect::Dialect;
use crate::error::{MetaError, Result};
use crate::output::OutputStyle;
use crate::patch::{LayoutPatcher, PatchStrategy, PatcherConfig};
use crate::prompt::{confirm, prompt_default};
use crate::render::{ModuleRenderer, ParameterSet, RendererConfig, TemplateSource};

/// Default site URL offered when the user supplies none.
const DEFAULT_SITE_URL: &str = "https://example.com";

/// Default site description offered when the user supplies none.
const DEFAULT_SITE_DESCRIPTION: &str = "My awesome Next.js website";

pub fn cmd_init(args: InitArgs) -> Result<()> {
    let ctx = ProjectContext::resolve()?;
    let interactive = !args.yes && atty::is(atty::Stream::Stdin);
    run(&ctx, args, interactive)
}

/// Run `init` against an explicit project context.
///
/// `interactive` controls whether missing site values are prompted for or
/// filled from defaults; flags always win over both.
pub(crate) fn run(ctx: &ProjectContext, args: InitArgs, interactive: bool) -> Result<()> {
    let style = OutputStyle::default();
    println!(
        "{}",
        style.info("Initializing Next.js SEO metadata configuration...")
    );

    if !ctx.is_next_project() {
        return Err(MetaError::UserError(
            "this does not look like a Next.js project.\n\
             Run this command in the root of a Next.js project \
             (package.json must list `next` as a dependency)."
                .to_string(),
        ));
    }

    let dialect = resolve_dialect(ctx, &args);
    let params = gather_params(ctx, &args, interactive, &style)?;

    let renderer = ModuleRenderer::new(RendererConfig {
        template: args
            .template
            .clone()
            .map(TemplateSource::File)
            .unwrap_or_default(),
        output_dir: ctx.root.clone(),
        module_basename: MODULE_BASENAME.to_string(),
    });
    let rendered = renderer.render(&params, dialect)?;
    println!(
        "{}",
        style.success(&format!(
            "Created {} metadata configuration at {}",
            rendered.dialect,
            rendered.path.display()
        ))
    );

    let update_layout = if args.skip_layout {
        false
    } else if interactive {
        confirm(
            &style,
            "Update your layout file to use the generated metadata?",
            true,
        )?
    } else {
        true
    };

    if update_layout {
        let patcher = LayoutPatcher::new(PatcherConfig {
            module_basename: MODULE_BASENAME.to_string(),
        })?;
        match patcher.patch(&ctx.layout_candidates())? {
            Some(outcome) => {
                let message = match outcome.strategy {
                    PatchStrategy::AlreadyPatched => format!(
                        "Layout file already uses the generated metadata: {}",
                        outcome.path.display()
                    ),
                    PatchStrategy::Replaced | PatchStrategy::Appended => {
                        format!("Updated layout file at {}", outcome.path.display())
                    }
                };
                println!("{}", style.success(&message));
            }
            None => {
                println!("{}", style.warning("Could not find a layout file to update."));
            }
        }
    }

    println!();
    println!("{}", style.info("Setup complete!"));
    println!(
        "You can now manage your site metadata in {}.",
        rendered.path.display()
    );
    Ok(())
}

/// Flag override beats project detection.
fn resolve_dialect(ctx: &ProjectContext, args: &InitArgs) -> Dialect {
    if args.typescript {
        Dialect::Typed
    } else if args.javascript {
        Dialect::Untyped
    } else {
        ctx.detect_dialect()
    }
}

/// Site parameters: flags first, then prompts (interactive only), then
/// defaults.
fn gather_params(
    ctx: &ProjectContext,
    args: &InitArgs,
    interactive: bool,
    style: &OutputStyle,
) -> Result<ParameterSet> {
    let default_name = ctx.default_site_name();

    let name = resolve_value(
        args.site_name.as_deref(),
        "What is your website name?",
        &default_name,
        interactive,
        style,
    )?;
    let url = resolve_value(
        args.site_url.as_deref(),
        "What is your website URL?",
        DEFAULT_SITE_URL,
        interactive,
        style,
    )?;
    let description = resolve_value(
        args.site_description.as_deref(),
        "Enter a brief description of your website:",
        DEFAULT_SITE_DESCRIPTION,
        interactive,
        style,
    )?;

    Ok(ParameterSet::site(&name, &url, &description))
}

fn resolve_value(
    flag: Option<&str>,
    question: &str,
    default: &str,
    interactive: bool,
    style: &OutputStyle,
) -> Result<String> {
    match flag {
        Some(value) => Ok(value.to_string()),
        None if interactive => prompt_default(style, question, default),
        None => Ok(default.to_string()),
    }
}
