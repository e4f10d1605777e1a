use crate::catalog::CatalogEntry;
use crate::common::env::{expand_env_vars, has_env_refs};

/// How an invocation string is handed to the operating system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchRoute {
    /// `shell:` tokens resolved by the shell's known-folder mechanism.
    ShellFolder(String),
    /// URI scheme activations (`ms-settings:`, `windowsdefender:`) that must
    /// go through `start`.
    UriStart(String),
    /// Everything else runs as a plain command line.
    Direct(String),
}

impl LaunchRoute {
    /// Concrete process invocation for this route on the current platform.
    pub fn plan(&self) -> LaunchPlan {
        plan_for(self)
    }
}

/// Resolve an invocation string. Environment references are expanded before
/// any prefix is inspected.
pub fn resolve_route(invocation: &str) -> LaunchRoute {
    let cmd = if has_env_refs(invocation) {
        expand_env_vars(invocation).into_owned()
    } else {
        invocation.to_string()
    };
    if cmd.starts_with("shell:") {
        LaunchRoute::ShellFolder(cmd)
    } else if cmd.starts_with("ms-settings:") || cmd == "windowsdefender:" {
        LaunchRoute::UriStart(cmd)
    } else {
        LaunchRoute::Direct(cmd)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPlan {
    /// Run a whole command line through the platform shell.
    ShellLine(String),
    /// Start `program` with explicit arguments.
    Program { program: String, args: Vec<String> },
    /// Hand `target` to the desktop's default opener.
    Open(String),
}

#[cfg(target_os = "windows")]
fn plan_for(route: &LaunchRoute) -> LaunchPlan {
    match route {
        LaunchRoute::ShellFolder(folder) => LaunchPlan::Program {
            program: "explorer.exe".into(),
            args: vec![folder.clone()],
        },
        LaunchRoute::UriStart(uri) => LaunchPlan::ShellLine(format!("start \"\" {uri}")),
        LaunchRoute::Direct(line) => LaunchPlan::ShellLine(line.clone()),
    }
}

#[cfg(not(target_os = "windows"))]
fn plan_for(route: &LaunchRoute) -> LaunchPlan {
    match route {
        LaunchRoute::ShellFolder(target) | LaunchRoute::UriStart(target) => {
            LaunchPlan::Open(target.clone())
        }
        LaunchRoute::Direct(line) => LaunchPlan::ShellLine(line.clone()),
    }
}

/// Starts processes for a [`LaunchPlan`]. Implementations must not block on
/// the launched program.
pub trait Launcher {
    fn launch(&self, plan: &LaunchPlan) -> std::io::Result<()>;
}

/// Spawns detached processes and forgets about them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, plan: &LaunchPlan) -> std::io::Result<()> {
        match plan {
            LaunchPlan::ShellLine(line) => spawn_shell_line(line),
            LaunchPlan::Program { program, args } => std::process::Command::new(program)
                .args(args)
                .spawn()
                .map(|_| ()),
            LaunchPlan::Open(target) => open::that_detached(target),
        }
    }
}

#[cfg(target_os = "windows")]
fn spawn_shell_line(line: &str) -> std::io::Result<()> {
    use std::os::windows::process::CommandExt;
    let mut cmd = std::process::Command::new("cmd");
    cmd.arg("/C").raw_arg(line);
    cmd.creation_flags(0x08000000); // CREATE_NO_WINDOW
    cmd.spawn().map(|_| ())
}

#[cfg(not(target_os = "windows"))]
fn spawn_shell_line(line: &str) -> std::io::Result<()> {
    let parts = shlex::split(line)
        .unwrap_or_else(|| line.split_whitespace().map(str::to_string).collect());
    let Some((program, args)) = parts.split_first() else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "empty command line",
        ));
    };
    std::process::Command::new(program)
        .args(args)
        .spawn()
        .map(|_| ())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to open {entry_name}:\n{message}")]
pub struct DispatchError {
    pub entry_name: String,
    pub message: String,
}

/// Maps catalog entries to external process launches.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher<L = SystemLauncher> {
    launcher: L,
}

impl<L: Launcher> Dispatcher<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    /// Launch `entry` without waiting for the spawned program.
    pub fn execute(&self, entry: &CatalogEntry) -> Result<(), DispatchError> {
        tracing::info!(entry = %entry.name, "executing: {}", entry.invocation);
        let route = resolve_route(&entry.invocation);
        tracing::debug!(?route, "resolved launch route");
        match self.launcher.launch(&route.plan()) {
            Ok(()) => {
                tracing::info!("command executed successfully: {}", entry.name);
                Ok(())
            }
            Err(e) => {
                tracing::error!("error executing {}: {}", entry.name, e);
                Err(DispatchError {
                    entry_name: entry.name.clone(),
                    message: e.to_string(),
                })
            }
        }
    }
}
