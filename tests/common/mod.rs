//! Shared test fixtures: a recording cloud provider and log capture

#![allow(dead_code)]

use async_trait::async_trait;
use export_swagger::adapters::provider::{CloudProvider, ExportRequest, PutObjectRequest};
use export_swagger::domain::{
    DeploymentContext, ExportedDescription, ProviderError, Result, StackName, StackOutput,
    StackOutputs,
};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

pub const ENDPOINT: &str = "https://abc123.execute-api.us-east-1.amazonaws.com/prod";

/// A remote call observed by [`RecordingProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    DescribeStack { stack: String, region: String },
    Export(ExportRequest),
    PutObject(PutObjectRequest),
}

/// What the fake export call returns
#[derive(Debug, Clone)]
pub enum ExportBehaviour {
    Body(Vec<u8>),
    NoBody,
    Fail,
}

/// Cloud provider that records calls and replays canned responses
pub struct RecordingProvider {
    outputs: Option<Vec<StackOutput>>,
    export: ExportBehaviour,
    upload_fails: bool,
    calls: Mutex<Vec<Call>>,
}

impl RecordingProvider {
    /// Stack with a `ServiceEndpoint` output and an export body of `{"swagger":"2.0"}`
    pub fn new() -> Self {
        Self {
            outputs: Some(vec![StackOutput::new("ServiceEndpoint", ENDPOINT)]),
            export: ExportBehaviour::Body(br#"{"swagger":"2.0"}"#.to_vec()),
            upload_fails: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_outputs(mut self, outputs: Vec<StackOutput>) -> Self {
        self.outputs = Some(outputs);
        self
    }

    pub fn with_missing_stack(mut self) -> Self {
        self.outputs = None;
        self
    }

    pub fn with_export(mut self, export: ExportBehaviour) -> Self {
        self.export = export;
        self
    }

    pub fn with_failing_upload(mut self) -> Self {
        self.upload_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn export_requests(&self) -> Vec<ExportRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Export(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn uploads(&self) -> Vec<PutObjectRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::PutObject(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CloudProvider for RecordingProvider {
    async fn describe_stack(
        &self,
        stack_name: &StackName,
        context: &DeploymentContext,
    ) -> Result<StackOutputs> {
        self.record(Call::DescribeStack {
            stack: stack_name.to_string(),
            region: context.region().to_string(),
        });
        match &self.outputs {
            Some(outputs) => Ok(StackOutputs::new(outputs.clone())),
            None => Err(ProviderError::StackNotFound(stack_name.to_string()).into()),
        }
    }

    async fn export_description(
        &self,
        request: &ExportRequest,
        _context: &DeploymentContext,
    ) -> Result<ExportedDescription> {
        self.record(Call::Export(request.clone()));
        match &self.export {
            ExportBehaviour::Body(body) => Ok(ExportedDescription::with_body(body.clone())),
            ExportBehaviour::NoBody => Ok(ExportedDescription::default()),
            ExportBehaviour::Fail => Err(ProviderError::ExportFailed {
                gateway: request.gateway_id.to_string(),
                message: "NotFoundException: Invalid REST API identifier".to_string(),
            }
            .into()),
        }
    }

    async fn put_object(
        &self,
        request: PutObjectRequest,
        _context: &DeploymentContext,
    ) -> Result<()> {
        let failure = self.upload_fails.then(|| ProviderError::UploadFailed {
            bucket: request.bucket.clone(),
            key: request.key.clone(),
            message: "AccessDenied".to_string(),
        });
        self.record(Call::PutObject(request));
        match failure {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

pub fn context() -> DeploymentContext {
    DeploymentContext::new("users-api", "prod", "us-east-1")
}

/// `custom` table from TOML text
pub fn custom(src: &str) -> toml::Table {
    toml::from_str(src).unwrap()
}

pub fn complete_destination() -> toml::Table {
    custom(
        r#"
[swaggerDestinations]
s3BucketName = "my-bucket"
s3KeyName = "api.json"
"#,
    )
}

pub fn arc(provider: &Arc<RecordingProvider>) -> Arc<dyn CloudProvider> {
    provider.clone()
}

/// In-memory log sink for a thread-local tracing subscriber
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).to_string()
    }

    /// Installs an INFO-level subscriber writing here for the current thread
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

pub struct CapturedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter {
            buffer: self.buffer.clone(),
        }
    }
}
