//! The `DefenderClient` facade.
//!
//! Every operation follows the same pipeline: validate inputs, check
//! privileges where required, build the argument list, invoke the tool
//! once, and optionally parse its output. Validation and privilege failures
//! are raised before anything spawns; no operation ever retries, because
//! re-running a scan has real-world side effects.

use crate::args;
use crate::core::error::{DefenderError, DefenderResult};
use crate::core::options::{
    validate_full_scan_timeout, validate_scan_timeout, ScanOptions, DEFAULT_FULL_SCAN_TIMEOUT,
    DEFAULT_SCAN_TIMEOUT,
};
use crate::core::types::{
    DefinitionsScope, QuarantinedThreat, RestoreTarget, ScanKind, Threat, UpdateSource,
};
use crate::invoker::{SystemInvoker, ToolInvoker, ToolOutput};
use crate::parser;
use crate::platform::{locate_defender, PathResolver, PrivilegeChecker, SystemPaths, SystemPrivileges};

use std::path::PathBuf;
use std::sync::Arc;

/// Typed facade over the Defender command-line tool.
///
/// Each method maps to one tool invocation. Construct with
/// [`DefenderClient::new`] for system defaults, or use the
/// [builder](DefenderClient::builder) to substitute the invoker, privilege
/// check, or path resolver.
///
/// # Examples
///
/// ```rust,no_run
/// use defender_bridge::{DefenderClient, ScanOptions};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DefenderClient::new()?;
/// let threats = client.scan("C:\\Downloads", &ScanOptions::default()).await?;
/// for threat in threats {
///     println!("{}: {} file(s)", threat.name, threat.files.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DefenderClient {
    tool_path: PathBuf,
    invoker: Arc<dyn ToolInvoker>,
    privileges: Arc<dyn PrivilegeChecker>,
    paths: Arc<dyn PathResolver>,
}

/// Builder for [`DefenderClient`].
#[derive(Debug, Default)]
pub struct DefenderClientBuilder {
    tool_path: Option<PathBuf>,
    invoker: Option<Arc<dyn ToolInvoker>>,
    privileges: Option<Arc<dyn PrivilegeChecker>>,
    paths: Option<Arc<dyn PathResolver>>,
}

impl DefenderClientBuilder {
    /// Uses an explicit tool path instead of probing the system.
    pub fn tool_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tool_path = Some(path.into());
        self
    }

    /// Substitutes the process invoker.
    pub fn invoker(mut self, invoker: Arc<dyn ToolInvoker>) -> Self {
        self.invoker = Some(invoker);
        self
    }

    /// Substitutes the privilege checker.
    pub fn privileges(mut self, privileges: Arc<dyn PrivilegeChecker>) -> Self {
        self.privileges = Some(privileges);
        self
    }

    /// Substitutes the path resolver.
    pub fn paths(mut self, paths: Arc<dyn PathResolver>) -> Self {
        self.paths = Some(paths);
        self
    }

    /// Builds the client, locating the tool if no path was given.
    ///
    /// # Errors
    ///
    /// Returns [`DefenderError::NotInstalled`] when the tool cannot be
    /// found and no explicit path was provided.
    pub fn build(self) -> DefenderResult<DefenderClient> {
        let tool_path = match self.tool_path {
            Some(path) => path,
            None => locate_defender()?,
        };
        Ok(DefenderClient {
            tool_path,
            invoker: self.invoker.unwrap_or_else(|| Arc::new(SystemInvoker::new())),
            privileges: self
                .privileges
                .unwrap_or_else(|| Arc::new(SystemPrivileges::new())),
            paths: self.paths.unwrap_or_else(|| Arc::new(SystemPaths::new())),
        })
    }
}

impl DefenderClient {
    /// Creates a client with system defaults, locating the tool on disk.
    pub fn new() -> DefenderResult<Self> {
        Self::builder().build()
    }

    /// Returns a builder for customizing the client.
    pub fn builder() -> DefenderClientBuilder {
        DefenderClientBuilder::default()
    }

    /// Returns the path of the tool this client invokes.
    pub fn tool_path(&self) -> &std::path::Path {
        &self.tool_path
    }

    async fn invoke(&self, args: Vec<String>) -> DefenderResult<ToolOutput> {
        self.invoker.execute(&self.tool_path, &args).await
    }

    fn require_elevation(&self) -> DefenderResult<()> {
        if self.privileges.is_elevated() {
            Ok(())
        } else {
            Err(DefenderError::PrivilegeRequired)
        }
    }

    fn require_non_empty(value: &str, what: &str) -> DefenderResult<()> {
        if value.trim().is_empty() {
            Err(DefenderError::validation(format!("{what} must not be empty")))
        } else {
            Ok(())
        }
    }

    /// Runs a quick scan. `timeout` is in days, defaulting to
    /// [`DEFAULT_SCAN_TIMEOUT`]; the call is fire-and-forget and the tool
    /// reports findings through its own channels.
    pub async fn quick_scan(&self, timeout: Option<u32>) -> DefenderResult<()> {
        let timeout = timeout.unwrap_or(DEFAULT_SCAN_TIMEOUT);
        validate_scan_timeout(timeout)?;
        self.invoke(args::scan(ScanKind::Quick, timeout)).await?;
        Ok(())
    }

    /// Runs a full system scan. `timeout` is in days, defaulting to
    /// [`DEFAULT_FULL_SCAN_TIMEOUT`].
    pub async fn full_scan(&self, timeout: Option<u32>) -> DefenderResult<()> {
        let timeout = timeout.unwrap_or(DEFAULT_FULL_SCAN_TIMEOUT);
        validate_full_scan_timeout(timeout)?;
        self.invoke(args::scan(ScanKind::Full, timeout)).await?;
        Ok(())
    }

    /// Cancels an in-progress quick scan.
    pub async fn cancel_quick_scan(&self) -> DefenderResult<()> {
        self.invoke(args::cancel_scan(ScanKind::Quick)).await?;
        Ok(())
    }

    /// Cancels an in-progress full scan.
    pub async fn cancel_full_scan(&self) -> DefenderResult<()> {
        self.invoke(args::cancel_scan(ScanKind::Full)).await?;
        Ok(())
    }

    /// Runs a custom scan of `dir` and returns the detected threats.
    ///
    /// A clean scan returns an empty list. When the tool exits with its
    /// "threats found" sentinel, the report on stdout is parsed into
    /// [`Threat`] records; any other non-zero exit, and a sentinel exit
    /// whose output is the tool's crash banner, propagates as
    /// [`DefenderError::ToolExecution`].
    pub async fn scan(&self, dir: &str, options: &ScanOptions) -> DefenderResult<Vec<Threat>> {
        Self::require_non_empty(dir, "scan target")?;
        options.validate()?;
        let target = self.paths.resolve(dir)?;

        match self.invoke(args::custom_scan(&target, options)).await {
            Ok(_) => Ok(Vec::new()),
            Err(DefenderError::ToolExecution { exit_code, stdout })
                if exit_code == parser::THREATS_FOUND_EXIT_CODE
                    && !parser::is_crash_banner(&stdout) =>
            {
                let threats = parser::parse_threat_report(&stdout)?;
                tracing::info!(path = %target.display(), count = threats.len(), "scan found threats");
                Ok(threats)
            }
            Err(err) => Err(err),
        }
    }

    /// Updates definitions from the given source.
    ///
    /// A UNC source path is resolved to an absolute path before use.
    pub async fn update_definitions(&self, source: UpdateSource) -> DefenderResult<()> {
        let source = match source {
            UpdateSource::Mmpc => UpdateSource::Mmpc,
            UpdateSource::Unc(path) => {
                Self::require_non_empty(&path, "UNC source path")?;
                let resolved = self.paths.resolve(&path)?;
                UpdateSource::Unc(resolved.to_string_lossy().into_owned())
            }
        };
        self.invoke(args::signature_update(&source)).await?;
        Ok(())
    }

    /// Removes all definitions. Requires elevation.
    pub async fn remove_all_definitions(&self) -> DefenderResult<()> {
        self.require_elevation()?;
        self.invoke(args::remove_definitions(DefinitionsScope::All))
            .await?;
        Ok(())
    }

    /// Reverts to the previous definition set. Requires elevation.
    pub async fn revert_definitions(&self) -> DefenderResult<()> {
        self.require_elevation()?;
        self.invoke(args::remove_definitions(DefinitionsScope::LastUpdate))
            .await?;
        Ok(())
    }

    /// Reverts the scan engine to its previous version. Requires elevation.
    pub async fn revert_engine(&self) -> DefenderResult<()> {
        self.require_elevation()?;
        self.invoke(args::remove_definitions(DefinitionsScope::Engine))
            .await?;
        Ok(())
    }

    /// Installs a dynamic signature from a file. Requires elevation.
    ///
    /// The path is passed to the tool verbatim, matching its own handling
    /// of signature package locations.
    pub async fn add_dynamic_signature(&self, path: &str) -> DefenderResult<()> {
        self.require_elevation()?;
        Self::require_non_empty(path, "signature path")?;
        self.invoke(args::add_dynamic_signature(path)).await?;
        Ok(())
    }

    /// Removes a dynamic signature set. Requires elevation.
    ///
    /// With an ID, removes that one set; with `None`, removes all
    /// dynamically downloaded signatures.
    pub async fn remove_dynamic_signature(&self, id: Option<&str>) -> DefenderResult<()> {
        self.require_elevation()?;
        let args = match id {
            Some(id) => {
                Self::require_non_empty(id, "signature set ID")?;
                args::remove_dynamic_signature(id)
            }
            None => args::remove_definitions(DefinitionsScope::DynamicSignatures),
        };
        self.invoke(args).await?;
        Ok(())
    }

    /// Returns whether `dir` is excluded from scanning. Requires elevation.
    ///
    /// The tool answers through its exit status alone, so every non-zero
    /// exit reduces to `false` and is never surfaced as an error.
    pub async fn is_excluded(&self, dir: &str) -> DefenderResult<bool> {
        self.require_elevation()?;
        Self::require_non_empty(dir, "exclusion path")?;
        let target = self.paths.resolve(dir)?;

        match self.invoke(args::check_exclusion(&target)).await {
            Ok(_) => Ok(true),
            Err(DefenderError::ToolExecution { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Lists the contents of the quarantine store. Requires elevation.
    pub async fn quarantined_threats(&self) -> DefenderResult<Vec<QuarantinedThreat>> {
        self.require_elevation()?;
        let output = self.invoke(args::restore(&RestoreTarget::ListAll, None)).await?;
        parser::parse_quarantine_listing(&output.stdout)
    }

    /// Restores a quarantined item. Requires elevation.
    ///
    /// When `target` names an existing path on disk it is restored by
    /// resolved path (`-Path`); otherwise it is treated as a threat name and
    /// passed verbatim (`-Name`). `destination`, when given, is resolved and
    /// used as the restore directory.
    pub async fn restore_quarantined(
        &self,
        target: &str,
        destination: Option<&str>,
    ) -> DefenderResult<()> {
        self.require_elevation()?;
        Self::require_non_empty(target, "restore target")?;

        let resolved = self.paths.resolve(target)?;
        let restore_target = if self.paths.exists(&resolved) {
            RestoreTarget::Path(resolved)
        } else {
            RestoreTarget::Name(target.to_string())
        };
        let destination = match destination {
            Some(dir) => {
                Self::require_non_empty(dir, "restore destination")?;
                Some(self.paths.resolve(dir)?)
            }
            None => None,
        };

        self.invoke(args::restore(&restore_target, destination.as_deref()))
            .await?;
        Ok(())
    }

    /// Restores everything in quarantine. Requires elevation.
    pub async fn restore_all_quarantined(&self) -> DefenderResult<()> {
        self.require_elevation()?;
        self.invoke(args::restore(&RestoreTarget::All, None)).await?;
        Ok(())
    }
}
