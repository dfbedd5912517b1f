use super::effects::{Magnetic, Reveal, TextReveal, TiltCard};
use super::location::LocationButton;
use super::tracking::{
    element_bounds, use_hover_intent, use_measure_after_mount, PointerContext, ScrollContext,
};
use crate::motion::{parallax_percent, scroll_progress, Vec2, CARD_REVEAL_THRESHOLD};
use crate::widgets::{Accordion, Carousel, CursorVariant, SlidePlacement, Theme};
use yew::prelude::*;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("Início", "inicio"),
    ("Sobre Nós", "sobre-nos"),
    ("Serviços", "servicos"),
    ("Contato", "contato"),
];

struct Entry {
    title: &'static str,
    body: &'static str,
}

const STEPS: [Entry; 4] = [
    Entry {
        title: "Diagnóstico",
        body: "Mergulhamos fundo em sua marca, mercado e concorrentes para identificar os principais desafios e oportunidades.",
    },
    Entry {
        title: "Planejamento Estratégico",
        body: "Criamos um roteiro de marketing personalizado e orientado por dados, adaptado aos seus objetivos de negócio.",
    },
    Entry {
        title: "Execução",
        body: "Nossa equipe de especialistas dá vida à estratégia com conteúdo atraente, campanhas direcionadas e execução impecável.",
    },
    Entry {
        title: "Otimização",
        body: "Monitoramos continuamente o desempenho, analisamos os resultados e refinamos nossa abordagem para maximizar seu ROI.",
    },
];

const TESTIMONIALS: [Entry; 3] = [
    Entry {
        title: "João Silva, CEO da Inova S.A.",
        body: "A Skyling transformou nossa presença digital. A abordagem estratégica deles dobrou nossos leads em apenas três meses. Um verdadeiro parceiro de crescimento.",
    },
    Entry {
        title: "Maria Souza, Fundadora da Criativa & Cia.",
        body: "A criatividade e a execução da equipe são inigualáveis. Eles entenderam perfeitamente a visão da nossa marca e entregaram resultados excepcionais.",
    },
    Entry {
        title: "Carlos Pereira, Diretor de Marketing",
        body: "Trabalhar com a Skyling foi como ter uma equipe interna de especialistas. Seus insights e otimizações foram inestimáveis.",
    },
];

const SERVICES: [Entry; 6] = [
    Entry {
        title: "Planejamento Estratégico",
        body: "Estratégias de marketing de funil completo.",
    },
    Entry {
        title: "Tráfego Pago",
        body: "Anúncios no Google, Meta e LinkedIn.",
    },
    Entry {
        title: "Edição de Vídeo, VFX & 3D",
        body: "Conteúdo visual de alto impacto.",
    },
    Entry {
        title: "Mídias Sociais",
        body: "Crescimento orgânico e gestão de comunidade.",
    },
    Entry {
        title: "Design Gráfico",
        body: "Branding e identidade visual.",
    },
    Entry {
        title: "Desenvolvimento de Sites",
        body: "Sites modernos, rápidos e responsivos.",
    },
];

const FOUNDERS: [Entry; 2] = [
    Entry {
        title: "Fundador 1",
        body: "Breve biografia sobre o fundador, sua experiência e visão.",
    },
    Entry {
        title: "Fundador 2",
        body: "Breve biografia sobre o segundo fundador, seu histórico e papel.",
    },
];

const VALUES: [&str; 4] = [
    "Parceria: Nós temos sucesso quando você tem sucesso.",
    "Inovação: Sempre expandindo os limites do que é possível.",
    "Integridade: Transparentes, honestos e orientados por dados.",
    "Excelência: Comprometidos em entregar o trabalho da mais alta qualidade.",
];

const SPOTLIGHT_RADIUS: f64 = 200.0;

#[derive(Properties, PartialEq)]
struct LogoProps {
    #[prop_or_default]
    class: Classes,
}

#[function_component(Logo)]
fn logo(props: &LogoProps) -> Html {
    html! {
        <svg class={classes!("logo", props.class.clone())} viewBox="0 0 240 40" role="img" aria-label="Skyling">
            <text
                x="50%"
                y="50%"
                dominant-baseline="middle"
                text-anchor="middle"
                font-family="Poppins, sans-serif"
                font-size="38"
                font-weight="800"
                letter-spacing="-1"
            >
                <tspan>{"Skyling"}</tspan>
                <tspan dx="-2">{"."}</tspan>
            </text>
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let scroll = use_context::<ScrollContext>().unwrap_or_default();
    let text_hover = use_hover_intent(CursorVariant::Text);
    let link_hover = use_hover_intent(CursorVariant::Link);

    html! {
        <header class={classes!("site-header", (scroll.scroll_y > 8.0).then_some("is-scrolled"))}>
            <a
                class="brand"
                href="#inicio"
                onmouseenter={text_hover.enter.clone()}
                onmouseleave={text_hover.leave.clone()}
            >
                <Logo />
            </a>
            <nav class="site-nav" aria-label="Principal">
                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|(label, slug)| html! {
                        <Magnetic key={*slug}>
                            <a
                                class="nav-link"
                                href={format!("#{slug}")}
                                onmouseenter={link_hover.enter.clone()}
                                onmouseleave={link_hover.leave.clone()}
                            >
                                {*label}
                            </a>
                        </Magnetic>
                    }) }
                </div>
                <Magnetic>
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={props.theme.toggle_label()}
                        aria-pressed={props.theme.is_dark().to_string()}
                        onclick={props.on_toggle_theme.clone()}
                        onmouseenter={link_hover.enter.clone()}
                        onmouseleave={link_hover.leave.clone()}
                    >
                        <span aria-hidden="true">{props.theme.icon()}</span>
                    </button>
                </Magnetic>
            </nav>
        </header>
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let pointer = use_context::<PointerContext>().unwrap_or_default();
    let text_hover = use_hover_intent(CursorVariant::Text);
    let link_hover = use_hover_intent(CursorVariant::Link);

    let spotlight_style = pointer
        .position
        .map(|position| {
            format!(
                "--spot-x: {:.0}px; --spot-y: {:.0}px; --spot-radius: {SPOTLIGHT_RADIUS:.0}px;",
                position.x, position.y
            )
        })
        .unwrap_or_default();

    html! {
        <section id="inicio" class="hero">
            <div class="hero-spotlight" style={spotlight_style} aria-hidden="true" />
            <div class="hero-content">
                <div
                    class="enter enter-delay-1"
                    onmouseenter={text_hover.enter.clone()}
                    onmouseleave={text_hover.leave.clone()}
                >
                    <Logo class="hero-logo" />
                </div>
                <h2
                    class="hero-title enter enter-delay-2"
                    onmouseenter={text_hover.enter.clone()}
                    onmouseleave={text_hover.leave.clone()}
                >
                    {"Marketing"}
                </h2>
                <p class="hero-lead enter enter-delay-3">
                    {"Marketing completo para transformar sua marca em uma referência. Vamos começar?"}
                </p>
                <Magnetic class="enter enter-delay-4">
                    <a
                        class="cta-button"
                        href="#contato"
                        onmouseenter={link_hover.enter.clone()}
                        onmouseleave={link_hover.leave.clone()}
                    >
                        {"Vamos Começar"}
                    </a>
                </Magnetic>
            </div>
        </section>
    }
}

#[function_component(ProblemSolutionSection)]
pub fn problem_solution_section() -> Html {
    let scroll = use_context::<ScrollContext>().unwrap_or_default();
    let node_ref = use_node_ref();
    use_measure_after_mount();
    let progress = element_bounds(&node_ref)
        .map(|bounds| scroll_progress(bounds.top, bounds.height, scroll.viewport_height))
        .unwrap_or(0.0);
    let drift = format!(
        "transform: translateY({:.2}%);",
        parallax_percent(progress, -10.0, 10.0)
    );

    html! {
        <section ref={node_ref} id="problema-solucao" class="section problem-solution">
            <div class="container">
                <div style={drift}>
                    <TextReveal
                        class="headline"
                        text="Sua marca merece mais que uma presença online — merece resultados reais."
                    />
                </div>
                <div class="two-columns">
                    <Reveal threshold={CARD_REVEAL_THRESHOLD} from={Vec2::new(-50.0, 0.0)} duration_ms={700}>
                        <h3 class="accent-heading">{"O Problema"}</h3>
                        <p class="body-copy">
                            {"Muitas marcas lutam para se destacar. Elas investem em sites e redes sociais, mas veem pouco retorno. Estratégias genéricas, mensagens inconsistentes e a falta de decisões baseadas em dados levam à estagnação do crescimento e a oportunidades perdidas."}
                        </p>
                    </Reveal>
                    <Reveal threshold={CARD_REVEAL_THRESHOLD} from={Vec2::new(50.0, 0.0)} duration_ms={700} delay_ms={200}>
                        <h3 class="accent-heading">{"A Solução"}</h3>
                        <p class="body-copy">
                            {"Nós fornecemos um motor de marketing holístico. Ao combinar planejamento estratégico, execução criativa e otimização contínua, transformamos sua presença online em uma ferramenta poderosa para prospecção, engajamento e conversão, entregando impacto mensurável."}
                        </p>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[function_component(HowItWorksSection)]
pub fn how_it_works_section() -> Html {
    let text_hover = use_hover_intent(CursorVariant::Text);

    html! {
        <section id="como-funciona" class="section section-dark process">
            <div class="process-glow" aria-hidden="true" />
            <div class="container">
                <Reveal>
                    <h2 class="section-title">{"Como Funciona"}</h2>
                </Reveal>
                <div class="card-grid">
                    { for STEPS.iter().enumerate().map(|(index, step)| html! {
                        <Reveal
                            key={step.title}
                            threshold={CARD_REVEAL_THRESHOLD}
                            delay_ms={index as u32 * 150}
                            duration_ms={500}
                        >
                            <TiltCard class="glass-card" depth={40.0} on_hover={text_hover.toggle.clone()}>
                                <div class="step-number">{format!("0{}", index + 1)}</div>
                                <h3 class="card-title">{step.title}</h3>
                                <p class="card-copy">{step.body}</p>
                            </TiltCard>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn slide_style(placement: SlidePlacement) -> &'static str {
    match placement {
        SlidePlacement::Active => "opacity: 1; transform: translateX(0) scale(1);",
        SlidePlacement::Before => "opacity: 0; transform: translateX(-50px) scale(0.95);",
        SlidePlacement::After => "opacity: 0; transform: translateX(50px) scale(0.95);",
    }
}

#[function_component(SocialProofSection)]
pub fn social_proof_section() -> Html {
    let carousel = use_state(|| Carousel::new(TESTIMONIALS.len()));
    let link_hover = use_hover_intent(CursorVariant::Link);

    let Some(current) = *carousel else {
        return Html::default();
    };

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(Some(current.prev())))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(Some(current.next())))
    };

    html! {
        <Reveal id="prova-social" class="section">
            <div class="container">
                <h2 class="section-title">{"O Que Nossos Clientes Dizem"}</h2>
                <div class="carousel" aria-roledescription="carousel">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| {
                        let placement = current.placement(index);
                        html! {
                            <figure
                                key={testimonial.title}
                                class="testimonial"
                                style={slide_style(placement)}
                                aria-hidden={(placement != SlidePlacement::Active).to_string()}
                            >
                                <blockquote>{format!("\"{}\"", testimonial.body)}</blockquote>
                                <figcaption>{format!("- {}", testimonial.title)}</figcaption>
                            </figure>
                        }
                    }) }
                </div>
                <p class="carousel-counter" aria-live="polite">
                    {format!("{} / {}", current.index() + 1, current.len())}
                </p>
                <div class="carousel-controls">
                    <Magnetic>
                        <button
                            class="round-button"
                            type="button"
                            aria-label="Depoimento anterior"
                            onclick={on_prev}
                            onmouseenter={link_hover.enter.clone()}
                            onmouseleave={link_hover.leave.clone()}
                        >
                            {"‹"}
                        </button>
                    </Magnetic>
                    <Magnetic>
                        <button
                            class="round-button"
                            type="button"
                            aria-label="Próximo depoimento"
                            onclick={on_next}
                            onmouseenter={link_hover.enter.clone()}
                            onmouseleave={link_hover.leave.clone()}
                        >
                            {"›"}
                        </button>
                    </Magnetic>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(FinalCtaSection)]
pub fn final_cta_section() -> Html {
    let link_hover = use_hover_intent(CursorVariant::Link);

    html! {
        <section id="cta-final" class="section final-cta">
            <div class="container">
                <TextReveal class="headline headline-large" text="Pronto para fazer sua marca decolar?" />
                <div class="final-cta-action">
                    <Magnetic>
                        <a
                            class="cta-button cta-button-large"
                            href="#contato"
                            onmouseenter={link_hover.enter.clone()}
                            onmouseleave={link_hover.leave.clone()}
                        >
                            {"Vamos Conversar"}
                        </a>
                    </Magnetic>
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let text_hover = use_hover_intent(CursorVariant::Text);

    html! {
        <Reveal id="sobre-nos" class="section page-section">
            <h1 class="page-title">{"Sobre Nós"}</h1>
            <div class="stack">
                <div>
                    <h2 class="accent-heading">{"Nossa Missão"}</h2>
                    <p class="body-copy">
                        {"Impulsionamos o sucesso dos nossos clientes através de inovação e marketing estratégico."}
                    </p>
                </div>
                <div>
                    <h2 class="accent-heading">{"Nossos Valores"}</h2>
                    <ul class="values-list">
                        { for VALUES.iter().map(|value| html! { <li key={*value}>{*value}</li> }) }
                    </ul>
                </div>
                <div>
                    <h2 class="accent-heading">{"Por Trás da Skyling"}</h2>
                    <div class="founder-grid">
                        { for FOUNDERS.iter().map(|founder| html! {
                            <TiltCard key={founder.title} class="solid-card" on_hover={text_hover.toggle.clone()}>
                                <h3 class="card-title">{founder.title}</h3>
                                <p class="card-copy">{founder.body}</p>
                            </TiltCard>
                        }) }
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let accordion = use_state(|| Accordion::new(SERVICES.len()));
    let link_hover = use_hover_intent(CursorVariant::Link);

    html! {
        <div id="servicos" class="section section-dark page-section">
            <Reveal>
                <h1 class="page-title centered">{"Nossos Serviços"}</h1>
            </Reveal>
            <div class="accordion">
                { for SERVICES.iter().enumerate().map(|(index, service)| {
                    let is_open = accordion.is_open(index);
                    let ontoggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |_: MouseEvent| accordion.set(accordion.toggle(index)))
                    };
                    let panel_id = format!("service-panel-{index}");

                    html! {
                        <Reveal
                            key={service.title}
                            class="accordion-item"
                            threshold={CARD_REVEAL_THRESHOLD}
                            from={Vec2::new(0.0, 30.0)}
                            delay_ms={index as u32 * 100}
                            duration_ms={500}
                        >
                            <button
                                class="accordion-trigger"
                                type="button"
                                aria-expanded={is_open.to_string()}
                                aria-controls={panel_id.clone()}
                                onclick={ontoggle}
                                onmouseenter={link_hover.enter.clone()}
                                onmouseleave={link_hover.leave.clone()}
                            >
                                <h2 class="accordion-title">{service.title}</h2>
                                <span class={classes!("chevron", is_open.then_some("is-open"))} aria-hidden="true">{"⌄"}</span>
                            </button>
                            <div id={panel_id} class={classes!("accordion-panel", is_open.then_some("is-open"))}>
                                <div class="accordion-panel-inner">
                                    <p>{format!("{} Mais detalhes sobre benefícios, preços e um CTA específico iriam aqui.", service.body)}</p>
                                </div>
                            </div>
                        </Reveal>
                    }
                }) }
            </div>
        </div>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let text_hover = use_hover_intent(CursorVariant::Text);
    let link_hover = use_hover_intent(CursorVariant::Link);

    let onsubmit = Callback::from(|event: SubmitEvent| {
        event.prevent_default();
        log::info!("contact form submitted");
    });

    html! {
        <Reveal id="contato" class="section page-section contact">
            <div class="container contact-grid">
                <div>
                    <h1 class="page-title">{"Entre em Contato"}</h1>
                    <p class="body-copy">
                        {"Tem um projeto em mente ou só quer dizer olá? Adoraríamos ouvir de você."}
                    </p>
                    <div class="contact-list">
                        <a
                            class="contact-row"
                            href="mailto:skylingagencia@gmail.com"
                            onmouseenter={link_hover.enter.clone()}
                            onmouseleave={link_hover.leave.clone()}
                        >
                            <span class="contact-icon" aria-hidden="true">{"✉"}</span>
                            <span>{"skylingagencia@gmail.com"}</span>
                        </a>
                        <a
                            class="contact-row"
                            href="https://www.instagram.com/skylingagencia"
                            target="_blank"
                            rel="noopener noreferrer"
                            onmouseenter={link_hover.enter.clone()}
                            onmouseleave={link_hover.leave.clone()}
                        >
                            <span class="contact-icon" aria-hidden="true">{"◎"}</span>
                            <span>{"@skylingagencia"}</span>
                        </a>
                        <div
                            class="contact-row"
                            onmouseenter={link_hover.enter.clone()}
                            onmouseleave={link_hover.leave.clone()}
                        >
                            <span class="contact-icon" aria-hidden="true">{"☏"}</span>
                            <span>{"(62) 91234-5678"}</span>
                        </div>
                        <div
                            class="contact-row"
                            onmouseenter={link_hover.enter.clone()}
                            onmouseleave={link_hover.leave.clone()}
                        >
                            <span class="contact-icon" aria-hidden="true">{"⌖"}</span>
                            <span>{"Goiânia, GO, Brasil"}</span>
                        </div>
                    </div>
                    <LocationButton />
                </div>
                <form class="contact-form" {onsubmit}>
                    <input
                        type="text"
                        placeholder="Nome"
                        onmouseenter={text_hover.enter.clone()}
                        onmouseleave={text_hover.leave.clone()}
                    />
                    <input
                        type="email"
                        placeholder="E-mail"
                        onmouseenter={text_hover.enter.clone()}
                        onmouseleave={text_hover.leave.clone()}
                    />
                    <input
                        type="tel"
                        placeholder="Telefone"
                        onmouseenter={text_hover.enter.clone()}
                        onmouseleave={text_hover.leave.clone()}
                    />
                    <textarea
                        placeholder="Mensagem"
                        rows="4"
                        onmouseenter={text_hover.enter.clone()}
                        onmouseleave={text_hover.leave.clone()}
                    />
                    <Magnetic>
                        <button
                            class="submit-button"
                            type="submit"
                            onmouseenter={link_hover.enter.clone()}
                            onmouseleave={link_hover.leave.clone()}
                        >
                            {"Quero escalar meu negócio!"}
                        </button>
                    </Magnetic>
                </form>
            </div>
        </Reveal>
    }
}
