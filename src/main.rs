use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use vr_oftalmo_client::storage::{FileStore, MemoryStore, SessionStore};
use vr_oftalmo_client::utils::logging::log_config_loaded;
use vr_oftalmo_client::utils::validation::require_matching_passwords;
use vr_oftalmo_client::{ApiClient, RegistroData, Settings};

/// CLI do Sistema VR de Oftalmologia
#[derive(Parser)]
#[command(name = "vr-oftalmo")]
#[command(version)]
#[command(about = "Cliente de linha de comando para a API GraphQL do Sistema VR de Oftalmologia", long_about = None)]
struct Cli {
    /// Endpoint GraphQL (sobrescreve config/default.toml)
    #[arg(long, env = "VR_OFTALMO_API__ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// Arquivo onde a sessão é persistida
    #[arg(long, env = "VR_OFTALMO_SESSION__FILE", global = true)]
    session_file: Option<String>,

    /// Não persiste a sessão (store em memória)
    #[arg(long, global = true)]
    memory: bool,

    /// Formato de saída (json, pretty)
    #[arg(short = 'o', long, default_value = "pretty", global = true)]
    output: OutputFormat,

    /// Modo verbose para debug
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug, PartialEq)]
enum OutputFormat {
    Json,
    Pretty,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            _ => Err(format!("Formato desconhecido: {}", s)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Faz login e salva a sessão
    Login {
        #[arg(short = 'e', long)]
        email: String,

        /// Senha (ou use VR_SENHA)
        #[arg(short = 's', long, env = "VR_SENHA", hide_env_values = true)]
        senha: String,
    },

    /// Cadastra um novo usuário e salva a sessão
    Registrar {
        #[arg(short = 'n', long)]
        nome: String,

        #[arg(short = 'e', long)]
        email: String,

        #[arg(short = 's', long, env = "VR_SENHA", hide_env_values = true)]
        senha: String,

        /// Confirmação da senha
        #[arg(long)]
        confirmar_senha: Option<String>,

        /// Tipo de usuário: comum, estudante ou medico
        #[arg(short = 't', long, default_value = "comum")]
        tipo: String,

        #[arg(long)]
        telefone: Option<String>,

        /// Número do CRM (médicos)
        #[arg(long)]
        crm: Option<String>,

        /// UF do CRM (médicos)
        #[arg(long)]
        uf_crm: Option<String>,

        /// Matrícula (estudantes)
        #[arg(long)]
        matricula: Option<String>,

        /// Instituição de ensino (estudantes)
        #[arg(long)]
        instituicao: Option<String>,
    },

    /// Encerra a sessão (a sessão local é sempre apagada)
    Logout,

    /// Renova o access token usando o refresh token salvo
    Renovar,

    /// Mostra o perfil completo do usuário logado
    Perfil,

    /// Verifica se o token atual ainda é válido
    Verificar {
        /// Diferencia token inválido de falha na requisição
        #[arg(short = 'd', long)]
        detalhado: bool,
    },

    /// Mostra o estado da sessão local (sem rede)
    Status,

    /// Executa um documento GraphQL arbitrário
    Query {
        /// Documento da query/mutation
        document: String,

        /// Variáveis em JSON
        #[arg(long)]
        variables: Option<String>,
    },
}

/// Estrutura para resposta padronizada
#[derive(serde::Serialize)]
struct CliResponse {
    success: bool,
    data: Option<Value>,
    error: Option<String>,
}

impl CliResponse {
    fn success(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg),
        }
    }
}

#[tokio::main]
async fn main() {
    // .env antes do parse: os argumentos com `env` leem dele
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if dotenv_loaded {
        tracing::info!("✅ Arquivo .env carregado com sucesso");
    } else {
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    let output_format = cli.output.clone();

    match execute_command(&cli).await {
        Ok(response) => {
            let exit_code = if response.success { 0 } else { 1 };
            output_response(response, &output_format);
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("❌ Erro: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn build_client(cli: &Cli) -> anyhow::Result<ApiClient> {
    let mut settings = Settings::new()?;
    if let Some(endpoint) = &cli.endpoint {
        settings.api.endpoint = endpoint.clone();
    }
    if let Some(file) = &cli.session_file {
        settings.session.file = file.clone();
    }
    settings.validate()?;
    log_config_loaded(&settings.api.endpoint);

    let store: Arc<dyn SessionStore> = if cli.memory {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FileStore::new(&settings.session.file))
    };

    Ok(ApiClient::from_settings(&settings, store))
}

async fn execute_command(cli: &Cli) -> anyhow::Result<CliResponse> {
    let client = build_client(cli)?;

    let response = match &cli.command {
        Commands::Login { email, senha } => match client.login(email, senha).await {
            Ok(payload) => CliResponse::success(json!({
                "message": "Login realizado com sucesso!",
                "user": payload.user,
                "role": payload.role,
            })),
            Err(e) => CliResponse::error(e.to_string()),
        },

        Commands::Registrar {
            nome, email, senha, confirmar_senha, tipo, telefone,
            crm, uf_crm, matricula, instituicao
        } => {
            if let Some(confirmacao) = confirmar_senha {
                require_matching_passwords(senha, confirmacao)?;
            }

            let data = RegistroData {
                nome_completo: nome.clone(),
                email: email.clone(),
                senha: senha.clone(),
                tipo_usuario: tipo.clone(),
                telefone: telefone.clone(),
                crm: crm.clone(),
                uf_crm: uf_crm.clone(),
                matricula: matricula.clone(),
                instituicao_ensino: instituicao.clone(),
            };

            match client.registrar(&data).await {
                Ok(payload) => CliResponse::success(json!({
                    "message": "Cadastro realizado com sucesso!",
                    "user": payload.user,
                })),
                Err(e) => CliResponse::error(e.to_string()),
            }
        }

        Commands::Logout => {
            client.logout().await;
            CliResponse::success(json!({ "message": "Sessão encerrada" }))
        }

        Commands::Renovar => match client.renovar_token().await {
            Ok(payload) => CliResponse::success(json!({
                "message": "Token renovado",
                "user": payload.user,
            })),
            Err(e) => CliResponse::error(e.to_string()),
        },

        Commands::Perfil => match client.obter_meu_perfil().await {
            Ok(profile) => CliResponse::success(serde_json::to_value(profile)?),
            Err(e) => CliResponse::error(e.to_string()),
        },

        Commands::Verificar { detalhado } => {
            if *detalhado {
                let status = client.verificar_token_detalhado().await;
                CliResponse::success(serde_json::to_value(status)?)
            } else {
                let valido = client.verificar_token().await;
                CliResponse::success(json!({ "tokenValido": valido }))
            }
        }

        Commands::Status => CliResponse::success(json!({
            "endpoint": client.endpoint(),
            "autenticado": client.is_authenticated(),
            "tipoUsuario": client.get_user_type(),
            "user": client.get_user_data(),
        })),

        Commands::Query { document, variables } => {
            let variables: Value = match variables {
                Some(raw) => serde_json::from_str(raw)?,
                None => json!({}),
            };

            match client.request(document, variables).await {
                Ok(data) => CliResponse::success(data),
                Err(e) => CliResponse::error(e.to_string()),
            }
        }
    };

    Ok(response)
}

fn output_response(response: CliResponse, format: &OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string(&response) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("❌ Erro ao serializar resposta: {}", e),
        },
        OutputFormat::Pretty => {
            if response.success {
                if let Some(data) = response.data {
                    println!("✅ Sucesso!");
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string())
                    );
                }
            } else if let Some(error) = response.error {
                eprintln!("❌ Erro: {}", error);
            }
        }
    }
}
