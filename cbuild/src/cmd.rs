use std::{collections::HashSet, io::ErrorKind, path::{Component, Path, PathBuf}, process::Command, sync::mpsc::{self, Receiver}, thread};

use crate::{error::{Error, Result}, presets::BuildPresets};

type ExecResult = Result<PathBuf>;

const COMPILERS: [&str; 3] = ["cc", "gcc", "clang"];

pub struct Cmd {
    args: Vec<String>,
    path: Option<PathBuf>,
    binary_path: PathBuf,
    output_path: PathBuf,
    preset: Option<String>,
    defines: Vec<String>,
    compiler: Option<PathBuf>,
}

impl Default for Cmd {
    fn default() -> Self {
        Self::new()
    }
}

impl Cmd {
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            path: None,
            binary_path: PathBuf::from("build"),
            output_path: PathBuf::from("build"),
            preset: None,
            defines: Vec::new(),
            compiler: None,
        }
    }

    pub fn add_arg<T>(mut self, arg: T) -> Self
    where
        T: Into<String>, {
        self.args.push(arg.into());
        self
    }

    pub fn set_path<T>(mut self, path: T) -> Self
    where
        T: Into<PathBuf>, {
        self.path = Some(path.into());
        self
    }

    pub fn set_binary_path<T>(mut self, path: T) -> Self
    where
        T: Into<PathBuf>, {
        self.binary_path = path.into();
        self
    }

    pub fn set_output_path<T>(mut self, path: T) -> Self
    where
        T: Into<PathBuf>, {
        self.output_path = path.into();
        self
    }

    pub fn set_preset<T>(mut self, preset: T) -> Self
    where
        T: Into<String>, {
        self.preset = Some(preset.into());
        self
    }

    pub fn add_define<T>(mut self, define: T) -> Self
    where
        T: Into<String>, {
        self.defines.push(format!("-D{}", define.into()));
        self
    }

    pub fn set_compiler<T>(mut self, compiler: T) -> Self
    where
        T: Into<PathBuf>, {
        self.compiler = Some(compiler.into());
        self
    }

    /// Builds the selected preset and returns the path of the static archive.
    pub fn build(&mut self) -> ExecResult {
        self.execute()
    }

    pub fn spawn(mut self) -> Receiver<ExecResult> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = tx.send(self.execute());
        });

        rx
    }

    fn execute(&mut self) -> ExecResult {
        let compiler = self.resolve_compiler()?;
        let archiver = resolve_tool("AR", &["ar"])?;
        tracing::debug!("using compiler {} and archiver {}", compiler, archiver);

        let source_path = match &self.path {
            Some(path) => path.clone(),
            None => PathBuf::from("."),
        };

        let preset_name = self.preset.as_deref().ok_or(Error::NoPreset)?;
        let presets = BuildPresets::new(&source_path)?;
        let preset = presets.get_preset(preset_name)?;
        if preset.get_sources().is_empty() {
            return Err(Error::EmptyPreset { name: preset_name.to_string() });
        }

        // binary path and output path must exist, create them if not
        check_dir_exists_and_create(&self.binary_path)?;
        check_dir_exists_and_create(&self.output_path)?;

        let pic_flag = if cfg!(windows) { None } else { Some("-fPIC") };

        let mut objects = Vec::with_capacity(preset.get_sources().len());
        let mut seen = HashSet::new();
        for source in preset.get_sources() {
            let name = object_name(source);
            if !seen.insert(name.clone()) {
                return Err(Error::DuplicateObject { object: name });
            }

            let file = source_path.join(source);
            let object = self.binary_path.join(name);

            tracing::info!("compiling {}", file.display());
            let status = compiler
                .command()
                .arg("-c")
                .arg(&file)
                .arg("-o")
                .arg(&object)
                .args(pic_flag)
                .args(preset.get_flags())
                .args(preset.get_defines())
                .args(&self.defines)
                .args(&self.args)
                .status()?;

            if !status.success() {
                return Err(Error::CompileFailed { file, status });
            }

            objects.push(object);
        }

        let archive = self.output_path.join(format!("lib{}.a", preset.get_name()));

        // ar only ever adds members, so start from an empty archive
        match std::fs::remove_file(&archive) {
            Err(e) if e.kind() != ErrorKind::NotFound => return Err(e.into()),
            _ => {}
        }

        tracing::info!("archiving {}", archive.display());
        let status = archiver
            .command()
            .arg("crs")
            .arg(&archive)
            .args(&objects)
            .status()?;

        if !status.success() {
            return Err(Error::ArchiveFailed { name: preset.get_name().to_string(), status });
        }

        Ok(archive)
    }

    fn resolve_compiler(&self) -> Result<Tool> {
        match &self.compiler {
            Some(compiler) => {
                let program = which::which(compiler).map_err(|_| Error::ToolNotFound {
                    tool: compiler.display().to_string(),
                })?;
                Ok(Tool { program, args: Vec::new() })
            }
            None => resolve_tool("CC", &COMPILERS),
        }
    }
}

/// A resolved program plus the leading arguments it was configured with,
/// e.g. `CC="ccache cc"` or `CC="gcc -m32"`.
struct Tool {
    program: PathBuf,
    args: Vec<String>,
}

impl Tool {
    fn parse(spec: &str) -> Result<Self> {
        let mut words = spec.split_whitespace();
        let not_found = || Error::ToolNotFound { tool: spec.to_string() };

        let program = words.next().ok_or_else(not_found)?;
        let program = which::which(program).map_err(|_| not_found())?;

        Ok(Self { program, args: words.map(String::from).collect() })
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Looks at the environment override first, then each candidate on `PATH`.
fn resolve_tool(env_key: &str, candidates: &[&str]) -> Result<Tool> {
    if let Ok(tool) = std::env::var(env_key) {
        return Tool::parse(&tool);
    }

    candidates
        .iter()
        .find_map(|c| which::which(c).ok())
        .map(|program| Tool { program, args: Vec::new() })
        .ok_or_else(|| Error::ToolNotFound { tool: candidates.join("/") })
}

/// Flattens the source's relative path into a single file name, so
/// `a/x.c` and `b/x.c` become `a_x.o` and `b_x.o`.
fn object_name(source: &Path) -> PathBuf {
    let mut parts: Vec<String> = source
        .parent()
        .into_iter()
        .flat_map(|p| p.components())
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if let Some(stem) = source.file_stem() {
        parts.push(stem.to_string_lossy().into_owned());
    }

    let mut name = PathBuf::from(parts.join("_"));
    name.set_extension("o");
    name
}

fn check_dir_exists_and_create(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
