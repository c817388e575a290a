use std::cell::RefCell;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub const ALIAS: &str = "myorg";

struct Response {
    args: String,
    body: String,
    exit_code: i32,
}

/// A project directory plus a scripted stand-in for the sfdx CLI.
pub struct TestEnv {
    pub project_dir: TempDir,
    pub tool_dir: TempDir,
    responses: RefCell<Vec<Response>>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_dir: TempDir::new().expect("failed to create project_dir"),
            tool_dir: TempDir::new().expect("failed to create tool_dir"),
            responses: RefCell::new(Vec::new()),
        }
    }

    /// Answer `sfdx <args>` with `body` on stdout and exit 0.
    pub fn respond(&self, args: &str, body: &str) {
        self.push(args, body, 0);
    }

    /// Answer `sfdx <args>` with `body` on stdout and exit 1.
    pub fn fail(&self, args: &str, body: &str) {
        self.push(args, body, 1);
    }

    fn push(&self, args: &str, body: &str, exit_code: i32) {
        self.responses.borrow_mut().push(Response {
            args: args.to_string(),
            body: body.to_string(),
            exit_code,
        });
    }

    /// Answer the catalog query for ALIAS at the default API version.
    pub fn describe(&self, types: &[(&str, bool)]) {
        self.respond(&describe_args(), &describe_json(types));
    }

    /// Answer a listing query for ALIAS at the default API version.
    pub fn list(&self, metadata_type: &str, folder: Option<&str>, members: &[(&str, Option<&str>)]) {
        self.respond(&list_args(metadata_type, folder), &list_json(members));
    }

    /// Build an sfmanifest Command with cwd = project_dir and the fake sfdx installed.
    pub fn cmd(&self) -> Command {
        let script = self.write_script();
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sfmanifest"));
        cmd.env("SFMANIFEST_SFDX", script)
            .env_remove("RUST_LOG")
            .current_dir(self.project_dir.path());
        cmd
    }

    /// Every sfdx invocation so far, one argument string per call.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.project_dir.path().join("manifest").join("package.xml")
    }

    pub fn manifest(&self) -> String {
        fs::read_to_string(self.manifest_path()).expect("manifest should be written")
    }

    fn log_path(&self) -> PathBuf {
        self.tool_dir.path().join("calls.log")
    }

    fn write_script(&self) -> PathBuf {
        let mut script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\ncase \"$*\" in\n",
            self.log_path().display()
        );
        for (i, response) in self.responses.borrow().iter().enumerate() {
            let body_path = self.tool_dir.path().join(format!("response-{i}.json"));
            fs::write(&body_path, &response.body).unwrap();
            script.push_str(&format!(
                "  '{}') cat '{}'; exit {} ;;\n",
                response.args,
                body_path.display(),
                response.exit_code
            ));
        }
        script.push_str("esac\n");
        script.push_str("echo '{\"status\":1,\"name\":\"UnexpectedCall\",\"message\":\"unexpected sfdx call\"}'\n");
        script.push_str("exit 1\n");

        let path = self.tool_dir.path().join("sfdx");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }
}

pub fn describe_args() -> String {
    format!("force:mdapi:describemetadata --targetusername {ALIAS} --json --apiversion 53.0")
}

pub fn list_args(metadata_type: &str, folder: Option<&str>) -> String {
    let mut args = format!(
        "force:mdapi:listmetadata --metadatatype {metadata_type} --targetusername {ALIAS} --json --apiversion 53.0"
    );
    if let Some(f) = folder {
        args.push_str(&format!(" --folder {f}"));
    }
    args
}

pub fn describe_json(types: &[(&str, bool)]) -> String {
    let objects: Vec<serde_json::Value> = types
        .iter()
        .map(|(name, in_folder)| {
            serde_json::json!({ "xmlName": name, "inFolder": in_folder, "directoryName": "x" })
        })
        .collect();
    serde_json::json!({
        "status": 0,
        "result": { "metadataObjects": objects, "organizationNamespace": "" }
    })
    .to_string()
}

pub fn list_json(members: &[(&str, Option<&str>)]) -> String {
    let result: Vec<serde_json::Value> = members
        .iter()
        .map(|(name, namespace)| match namespace {
            Some(ns) => serde_json::json!({ "fullName": name, "namespacePrefix": ns }),
            None => serde_json::json!({ "fullName": name }),
        })
        .collect();
    serde_json::json!({ "status": 0, "result": result }).to_string()
}

pub fn config_list_json(default_username: Option<&str>) -> String {
    let mut result = vec![serde_json::json!({ "key": "defaultdevhubusername", "value": "hub" })];
    if let Some(user) = default_username {
        result.push(serde_json::json!({ "key": "defaultusername", "value": user }));
    }
    serde_json::json!({ "status": 0, "result": result }).to_string()
}
