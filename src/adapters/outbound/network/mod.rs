/// Network adapters for external API calls
mod bitbucket_client;

pub use bitbucket_client::BitbucketRepositoryHost;
