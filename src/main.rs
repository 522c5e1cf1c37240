//! hantype - 두벌식 자판 한글 ↔ 영문 키 변환 도구

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hantype::config::load_config_or_default;
use hantype::{ConvertOptions, Converter};

#[derive(Parser)]
#[command(name = "hantype", version, about = "두벌식 자판 한글 <-> 영문 키 변환")]
struct Args {
    /// 변환 옵션 JSON 파일 (없으면 기본값)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 한글 → 영문 키 (ex: 영어로 -> duddjfh)
    Encode { text: String },
    /// 영문 키 → 한글 (ex: gksrmf -> 한글)
    Decode {
        /// 두 키 겹자음을 하나의 낱자음으로 (rt -> ㄳ)
        #[arg(long)]
        compound: bool,
        text: String,
    },
    /// 완성형 한글 → 자모 (ex: 간 -> ㄱㅏㄴ)
    Separate { text: String },
    /// 한글이 모두 완성된 글자인지 검사 (판정, 완성형 글자 수, 낱자모 포함 여부)
    Check {
        /// 자음만 있는 낱자모도 불완전으로 취급
        #[arg(long)]
        strict: bool,
        text: String,
    },
    /// 예시 문장 변환 결과 출력
    Demo,
}

fn main() -> Result<()> {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let options = match &args.config {
        Some(path) => load_config_or_default(path),
        None => ConvertOptions::default(),
    };

    let mut out = io::stdout().lock();

    match args.command {
        Command::Encode { text } => {
            writeln!(out, "{}", Converter::new(options).encode(&text))?;
        }
        Command::Decode { compound, text } => {
            let options =
                options.with_compound_consonant(compound || options.allow_compound_consonant);
            writeln!(out, "{}", Converter::new(options).decode(&text))?;
        }
        Command::Separate { text } => {
            writeln!(out, "{}", Converter::new(options).separate(&text))?;
        }
        Command::Check { strict, text } => {
            let converter = Converter::new(
                options.with_bare_consonant(!strict && options.allow_bare_consonant),
            );
            log::debug!("검사 옵션: {:?}", converter.options());

            let report = converter.report(&text);
            writeln!(out, "valid: {}", report.valid)?;
            writeln!(out, "syllables: {}", report.syllables)?;
            writeln!(out, "incomplete_jamo: {}", report.incomplete_jamo)?;
        }
        Command::Demo => run_demo(&mut out)?,
    }

    Ok(())
}

/// 변환 예시 출력
fn run_demo(out: &mut impl Write) -> io::Result<()> {
    let word = "ㄱㅅㄱㅅㄱㅅ ㅂㅅㅂㅅ 음하하하?!ㄹㅁ ㄹㅎ ㄹㄱ";
    let plain = Converter::default();
    let compound = Converter::new(ConvertOptions::default().with_compound_consonant(true));

    writeln!(out, "1. word : {}", word)?;

    let keys = plain.encode(word);
    writeln!(out, "2. encode : {}", keys)?;
    writeln!(out, "3-1. decode (겹자음 허용) : {}", compound.decode(&keys))?;
    writeln!(out, "3-2. decode (겹자음 허용X) : {}", plain.decode(&keys))?;
    writeln!(out, "4. separate : {}", plain.separate(word))?;

    let word2 = "ㄱㄳㄴㄴ이런글자 포함되도 ㅇㅋ?";
    let strict = Converter::new(ConvertOptions::default().with_bare_consonant(false));
    writeln!(out, "5-1. is_valid (자음 허용) : {}", plain.is_valid(word2))?;
    writeln!(out, "5-2. is_valid (자음 허용X) : {}", strict.is_valid(word2))?;
    writeln!(out, "5-3. report : {:?}", plain.report(word2))?;
    Ok(())
}
