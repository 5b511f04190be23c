//! dubeol - 두벌식 영문 키 입력 <-> 한글 변환 CLI

use clap::Parser;
use dubeol::config::{load_config, save_config, ConfigError, DubeolConfig};
use dubeol::inspect::inspect;
use dubeol::{convert, Direction};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// 한영 자판을 잘못 놓고 입력한 텍스트 복구
#[derive(Parser, Debug)]
#[command(name = "dubeol", version, about)]
struct Cli {
    /// 영문 키 입력 -> 한글 (dkssud -> 안녕)
    #[arg(short = 'k', long, conflicts_with = "to_roman")]
    to_hangul: bool,

    /// 한글 -> 영문 키 입력 (안녕 -> dkssud)
    #[arg(short = 'r', long)]
    to_roman: bool,

    /// 결과 구성을 stderr로 출력, 낱자모가 남으면 종료 코드 1
    #[arg(long)]
    check: bool,

    /// 이번에 사용한 방향을 기본값으로 저장
    #[arg(long)]
    save: bool,

    /// 변환할 텍스트 (없으면 표준 입력을 줄 단위로 변환)
    text: Vec<String>,
}

impl Cli {
    /// 변환할 인자 텍스트 (공백 하나로 연결), 없으면 None
    fn joined_text(&self) -> Option<String> {
        (!self.text.is_empty()).then(|| self.text.join(" "))
    }

    fn direction(&self, default: Direction) -> Direction {
        if self.to_roman {
            Direction::HangulToRoman
        } else if self.to_hangul {
            Direction::RomanToHangul
        } else {
            default
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // 로깅 초기화 (RUST_LOG가 없으면 설정값 사용)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .init();

    if let Err(e) = &loaded {
        log::warn!("설정 로드 실패, 기본값 사용: {}", e);
    }

    let direction = cli.direction(config.direction);
    log::debug!("변환 방향: {:?}", direction);

    if cli.save {
        match config_to_save(&loaded, direction) {
            Some(updated) => {
                if let Err(e) = save_config(&updated) {
                    log::error!("설정 저장 실패: {}", e);
                    return ExitCode::FAILURE;
                }
                log::info!("기본 변환 방향 저장: {:?}", direction);
            }
            None => log::warn!("읽을 수 없는 설정 파일을 덮어쓰지 않음, 저장 건너뜀"),
        }
    }

    let result = match cli.joined_text() {
        Some(text) => convert_line(&text, direction, cli.check, &mut io::stdout().lock()),
        None => run(io::stdin().lock(), direction, cli.check, &mut io::stdout().lock()),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("입출력 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `--save`로 기록할 설정
///
/// 기존 설정을 읽지 못했으면 None (사용자가 편집한 파일을 기본값으로 덮어쓰지 않음)
fn config_to_save(
    loaded: &Result<DubeolConfig, ConfigError>,
    direction: Direction,
) -> Option<DubeolConfig> {
    let mut config = loaded.as_ref().ok()?.clone();
    config.direction = direction;
    Some(config)
}

/// 입력을 줄 단위로 변환해 출력으로 쓰기
///
/// 반환값: 모든 결과에 낱자모가 없으면 true (`--check`가 아니면 항상 true)
fn run(
    input: impl BufRead,
    direction: Direction,
    check: bool,
    out: &mut impl Write,
) -> io::Result<bool> {
    let mut complete = true;
    for line in input.lines() {
        complete &= convert_line(&line?, direction, check, out)?;
    }
    Ok(complete)
}

fn convert_line(
    line: &str,
    direction: Direction,
    check: bool,
    out: &mut impl Write,
) -> io::Result<bool> {
    let converted = convert(line, direction);
    writeln!(out, "{}", converted)?;

    if !check {
        return Ok(true);
    }
    let composition = inspect(&converted);
    eprintln!("{}", composition);
    Ok(composition.loose_jamo == 0)
}
