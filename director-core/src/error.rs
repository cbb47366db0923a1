/// Fatal configuration problems, detected at construction time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("external_domain_suffix must not be empty")]
    EmptyExternalDomainSuffix,

    #[error("http_label_prefix must not be empty")]
    EmptyHttpLabelPrefix,

    #[error("grpc_label_prefix must not be empty")]
    EmptyGrpcLabelPrefix,
}
