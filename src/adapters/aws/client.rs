//! AWS SDK implementation of [`CloudProvider`]
//!
//! Uses CloudFormation `DescribeStacks`, API Gateway `GetExport` and S3
//! `PutObject`. Service clients are built per call from the shared SDK
//! configuration with the region of the deployment context.

use crate::adapters::provider::{
    CloudProvider, ExportRequest, PutObjectRequest, EXTENSIONS_PARAMETER,
};
use crate::config::ProviderConfig;
use crate::domain::{
    DeploymentContext, ExportedDescription, ProviderError, Result, StackName, StackOutput,
    StackOutputs,
};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_s3::primitives::ByteStream;

/// AWS-backed cloud provider
#[derive(Debug, Clone)]
pub struct AwsProvider {
    sdk_config: SdkConfig,
}

impl AwsProvider {
    /// Loads the default credential chain, optionally from a named profile
    ///
    /// # Errors
    ///
    /// Returns an error if no region is configured.
    pub async fn load(settings: &ProviderConfig) -> Result<Self> {
        if settings.region.trim().is_empty() {
            return Err(ProviderError::ClientConfiguration(
                "provider.region must not be empty".to_string(),
            )
            .into());
        }

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(settings.region.clone()));
        if let Some(profile) = &settings.profile {
            tracing::debug!(profile = %profile, "Using AWS shared config profile");
            loader = loader.profile_name(profile);
        }

        let sdk_config = loader.load().await;
        tracing::debug!(region = ?sdk_config.region(), "AWS configuration loaded");

        Ok(Self { sdk_config })
    }

    /// Wraps an already loaded SDK configuration
    pub fn from_sdk_config(sdk_config: SdkConfig) -> Self {
        Self { sdk_config }
    }

    fn cloudformation(&self, region: &str) -> aws_sdk_cloudformation::Client {
        let config = aws_sdk_cloudformation::config::Builder::from(&self.sdk_config)
            .region(aws_sdk_cloudformation::config::Region::new(region.to_string()))
            .build();
        aws_sdk_cloudformation::Client::from_conf(config)
    }

    fn apigateway(&self, region: &str) -> aws_sdk_apigateway::Client {
        let config = aws_sdk_apigateway::config::Builder::from(&self.sdk_config)
            .region(aws_sdk_apigateway::config::Region::new(region.to_string()))
            .build();
        aws_sdk_apigateway::Client::from_conf(config)
    }

    fn s3(&self, region: &str) -> aws_sdk_s3::Client {
        let config = aws_sdk_s3::config::Builder::from(&self.sdk_config)
            .region(aws_sdk_s3::config::Region::new(region.to_string()))
            .build();
        aws_sdk_s3::Client::from_conf(config)
    }
}

#[async_trait]
impl CloudProvider for AwsProvider {
    async fn describe_stack(
        &self,
        stack_name: &StackName,
        context: &DeploymentContext,
    ) -> Result<StackOutputs> {
        tracing::debug!(stack = %stack_name, region = %context.region(), "Describing stack");

        let output = self
            .cloudformation(context.region())
            .describe_stacks()
            .stack_name(stack_name.as_str())
            .send()
            .await
            .map_err(|e| ProviderError::DescribeStackFailed {
                stack: stack_name.to_string(),
                message: aws_sdk_cloudformation::error::DisplayErrorContext(&e).to_string(),
            })?;

        let stack = output
            .stacks()
            .first()
            .ok_or_else(|| ProviderError::StackNotFound(stack_name.to_string()))?;

        Ok(stack
            .outputs()
            .iter()
            .map(|o| {
                StackOutput::new(
                    o.output_key().unwrap_or_default(),
                    o.output_value().unwrap_or_default(),
                )
            })
            .collect())
    }

    async fn export_description(
        &self,
        request: &ExportRequest,
        context: &DeploymentContext,
    ) -> Result<ExportedDescription> {
        tracing::debug!(
            rest_api_id = %request.gateway_id,
            stage = %request.stage,
            export_type = request.export_type,
            "Requesting API export"
        );

        let output = self
            .apigateway(context.region())
            .get_export()
            .rest_api_id(request.gateway_id.as_str())
            .stage_name(&request.stage)
            .export_type(request.export_type)
            .accepts(request.accepts)
            .parameters(EXTENSIONS_PARAMETER.0, request.extensions)
            .send()
            .await
            .map_err(|e| ProviderError::ExportFailed {
                gateway: request.gateway_id.to_string(),
                message: aws_sdk_apigateway::error::DisplayErrorContext(&e).to_string(),
            })?;

        Ok(ExportedDescription {
            body: output.body().map(|blob| blob.as_ref().to_vec()),
            content_type: output.content_type().map(str::to_string),
        })
    }

    async fn put_object(
        &self,
        request: PutObjectRequest,
        context: &DeploymentContext,
    ) -> Result<()> {
        let PutObjectRequest { bucket, key, body } = request;
        tracing::debug!(bucket = %bucket, key = %key, bytes = body.len(), "Putting object");

        self.s3(context.region())
            .put_object()
            .bucket(&bucket)
            .key(&key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| ProviderError::UploadFailed {
                bucket: bucket.clone(),
                key: key.clone(),
                message: aws_sdk_s3::error::DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }
}
